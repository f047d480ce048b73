use criterion::{criterion_group, criterion_main, Criterion};
use lsbmark_core::{LsbCodec, Message, PixelGrid};

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let carrier = PixelGrid::from_fn(512, 512, |x, y| [x as u8, y as u8, (x ^ y) as u8]);
        let codec = LsbCodec::default();
        let secret_message = Message::from_text("Hello World!").expect("Cannot map message");

        b.iter(|| {
            codec
                .hide(&carrier, &secret_message)
                .expect("Cannot hide secret message")
        })
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
