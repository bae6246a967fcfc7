use std::env::args;
use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use pspwave::*;
use pspwave::embedding::TINTS;
use pspwave::wave::build_path;
use rgb::{ComponentBytes, RGBA8};
use std::time::Instant;

fn main() {
	let prefix = args().last().unwrap();
	let png_name = format!("{}.png", &prefix);

	let variant = match prefix.contains("tri") {
		true => WaveVariant::Triangular,
		false => WaveVariant::Sine,
	};
	let renderer = WaveRenderer::new(build_path(&DEFAULT_BOUNDS, &WaveParams::preset(variant)));
	renderer.log_path();

	let (w, h) = (600, 150);
	let mut canvas = vec![RGBA8::new(0, 0, 0, 0); w * h];
	let mut mask = vec![0; w * h];

	let runs = 10;
	let now = Instant::now();
	for _ in 0..runs {
		renderer.paint::<6, 36>(&mut canvas, &mut mask, w, h, w, TINTS[2], true).unwrap();
	}
	println!("rendered {} times in {}ms.", runs, now.elapsed().as_millis());

	let mut png_buf = Vec::new();
	{
		let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
		encoder.set_color(Rgba);
		encoder.set_depth(Eight);
		let mut writer = encoder.write_header().unwrap();
		writer.write_image_data(canvas.as_bytes()).unwrap();
	}
	write(&png_name, &png_buf).unwrap();
}
