use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use stegotext_core::{Carrier, CodecOptions};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let mut img: RgbImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        img.hide_text("Hello World!", &CodecOptions::default())
            .expect("Cannot hide secret message");

        b.iter(|| img.unveil().expect("Failed to unveil"))
    });

    c.bench_function("Image Decoding without secret", |b| {
        let img: RgbImage = ImageBuffer::new(512, 512);

        b.iter(|| img.unveil().expect("Failed to unveil"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
