use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use stegotext_core::{Carrier, CodecOptions};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding to memory", |b| {
        let mut plain_image: RgbImage =
            ImageBuffer::from_fn(512, 512, |x, y| Rgb([x as u8, y as u8, (x ^ y) as u8]));
        let secret_message = "Hello World!".repeat(100);

        b.iter(|| {
            plain_image
                .hide_text(&secret_message, &CodecOptions::default())
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
