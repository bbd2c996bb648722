//! End-to-end batch annotation tests.
//!
//! Drives the full CSV → fetch → extract → CSV flow against a mock HTTP
//! server, with the cache rooted in a temp directory.

use std::io::Cursor;

use image::{DynamicImage, Rgb, RgbImage};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cropcolor_cache::BlobCache;
use cropcolor_engine::{ImageFetcher, Strategy};
use cropcolor_worker::{dataset, BatchRunner};

fn png_bytes(color: [u8; 3]) -> Vec<u8> {
    let img = RgbImage::from_pixel(16, 16, Rgb(color));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageOutputFormat::Png)
        .expect("encode png");
    buf
}

#[tokio::test]
async fn test_batch_annotation_end_to_end() {
    let server = MockServer::start().await;

    // green.png is referenced by two rows but deduplication means it is
    // downloaded exactly once.
    Mock::given(method("GET"))
        .and(path("/green.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes([10, 200, 10])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/red.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes([220, 30, 30])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let input_path = dir.path().join("input.csv");
    let output_path = dir.path().join("output.csv");

    let input = format!(
        "crop_name,image_url\n\
         spinach,{base}/green.png\n\
         lettuce,{base}/green.png\n\
         tomato,{base}/red.png\n\
         ghost,{base}/broken.png\n\
         mystery,\n",
        base = server.uri()
    );
    std::fs::write(&input_path, input).expect("write input");

    let records = dataset::read_records(&input_path).expect("read records");
    assert_eq!(records.len(), 5);

    let urls = dataset::distinct_urls(&records);
    assert_eq!(urls.len(), 3);

    let runner = BatchRunner::with_parts(
        BlobCache::new(dir.path().join("cache")),
        ImageFetcher::with_default_timeout().expect("fetcher"),
        Strategy::plain(),
        4,
    );
    let outcomes = runner.run(&urls).await.expect("run");
    assert_eq!(outcomes.len(), 3);

    let rows = dataset::annotate(records, &outcomes);
    dataset::write_annotated(&output_path, &rows).expect("write output");

    // Exactly one output row per input row, in input order.
    let annotated = dataset::read_annotated(&output_path).expect("read output");
    assert_eq!(annotated.len(), 5);
    assert_eq!(annotated[0].crop_name, "spinach");
    assert_eq!(annotated[4].crop_name, "mystery");

    // Uniform images resolve to their exact color with the plain strategy.
    assert_eq!(annotated[0].dominant_color.as_deref(), Some("#0ac80a"));
    assert_eq!(annotated[1].dominant_color.as_deref(), Some("#0ac80a"));
    assert_eq!(annotated[2].dominant_color.as_deref(), Some("#dc1e1e"));

    // The failed fetch and the url-less row keep empty colors.
    assert_eq!(annotated[3].dominant_color, None);
    assert_eq!(annotated[4].dominant_color, None);
}

#[tokio::test]
async fn test_rerun_reuses_cache_across_runner_instances() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/blue.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(png_bytes([20, 40, 200])))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let cache_dir = dir.path().join("cache");
    let url = format!("{}/blue.png", server.uri());
    let urls = vec![url.clone()];

    // Two independent runner instances sharing one cache directory, as
    // two separate process runs would.
    for _ in 0..2 {
        let runner = BatchRunner::with_parts(
            BlobCache::new(&cache_dir),
            ImageFetcher::with_default_timeout().expect("fetcher"),
            Strategy::plain(),
            2,
        );
        let outcomes = runner.run(&urls).await.expect("run");
        assert_eq!(
            outcomes[&url].hex_color().map(|c| c.to_string()),
            Some("#1428c8".to_string())
        );
    }
}
