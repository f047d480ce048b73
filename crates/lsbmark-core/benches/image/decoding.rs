use criterion::{criterion_group, criterion_main, Criterion};
use lsbmark_core::{LsbCodec, Message, PixelGrid};

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let carrier = PixelGrid::from_fn(512, 512, |x, y| [x as u8, y as u8, (x ^ y) as u8]);
        let codec = LsbCodec::default();
        let secret = codec
            .hide(
                &carrier,
                &Message::from_text("Hello World!").expect("Cannot map message"),
            )
            .expect("Cannot hide secret message");

        b.iter(|| codec.unveil(&secret).expect("Cannot unveil secret message"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
