use criterion::{criterion_group, criterion_main, Criterion};
use stegotext_core::{AudioParams, Carrier, CodecOptions, PcmBuffer};

pub fn audio_encoding(c: &mut Criterion) {
    c.bench_function("Audio Encoding to memory", |b| {
        let frame_count = 44100;
        let mut audio = PcmBuffer::new(
            AudioParams {
                channels: 2,
                sample_width: 2,
                frame_rate: 44100,
                frame_count,
            },
            vec![0; frame_count as usize * 4],
        )
        .expect("Cannot create audio carrier");
        let secret_message = "Hello World!".repeat(100);

        b.iter(|| {
            audio
                .hide_text(&secret_message, &CodecOptions::default())
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, audio_encoding);
criterion_main!(benches);
