use criterion::{criterion_group, criterion_main, Criterion};
use stegotext_core::{AudioParams, Carrier, CodecOptions, PcmBuffer};

fn carrier_audio() -> PcmBuffer {
    let frame_count = 44100;
    PcmBuffer::new(
        AudioParams {
            channels: 2,
            sample_width: 2,
            frame_rate: 44100,
            frame_count,
        },
        (0..frame_count as usize * 4).map(|i| (i % 256) as u8).collect(),
    )
    .expect("Cannot create audio carrier")
}

pub fn audio_decoding(c: &mut Criterion) {
    c.bench_function("Audio Decoding", |b| {
        let mut audio = carrier_audio();
        audio
            .hide_text("Hello World!", &CodecOptions::default())
            .expect("Cannot hide secret message");

        b.iter(|| audio.unveil().expect("Failed to unveil"))
    });
}

criterion_group!(benches, audio_decoding);
criterion_main!(benches);
