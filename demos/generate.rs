use pspwave::*;
use pspwave::embedding::background_image;

fn main() {
	for variant in [WaveVariant::Sine, WaveVariant::Triangular] {
		let path = generate(&DEFAULT_BOUNDS, &WaveParams::preset(variant));
		println!("{:?}: {}", variant, path);
		println!("background-image: {};", background_image(&DEFAULT_BOUNDS, &path));
	}
}
