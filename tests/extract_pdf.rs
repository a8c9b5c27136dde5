//! End-to-end extraction over real PDF bytes
//!
//! Builds small documents in memory with lopdf and runs the full upload
//! validation + extraction path against them.

use dictado::extract::{ExtractError, PdfTextExtractor, UploadedFile};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

/// One text run per page, standard Type1 font
fn build_pdf(page_texts: &[&str]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in page_texts {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer).expect("serialize PDF");
    buffer
}

fn upload(data: Vec<u8>) -> UploadedFile {
    init_tracing();
    UploadedFile::new("practice.pdf", "application/pdf", data)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dictado=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

#[tokio::test]
async fn extracts_pages_in_order_with_one_newline_each() {
    let extractor = PdfTextExtractor::default();
    let file = upload(build_pdf(&["Reading practice page one", "And then page two"]));

    let text = extractor.extract(Some(&file)).await.expect("extract");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2, "one line per page, got {:?}", text);
    assert!(lines[0].contains("page one"));
    assert!(lines[1].contains("page two"));
    assert!(text.ends_with('\n'));
}

#[tokio::test]
async fn reports_page_count() {
    let extractor = PdfTextExtractor::default();
    let file = upload(build_pdf(&["a", "b", "c"]));

    assert_eq!(extractor.page_count(Some(&file)).await.expect("count"), 3);
}

#[tokio::test]
async fn corrupted_bytes_fail_with_extraction_failure() {
    let extractor = PdfTextExtractor::default();
    let file = upload(b"definitely not a pdf".to_vec());

    let result = extractor.extract(Some(&file)).await;
    assert!(matches!(result, Err(ExtractError::ExtractionFailure(_))));
}

#[tokio::test]
async fn wrong_media_type_rejected_even_with_valid_bytes() {
    let extractor = PdfTextExtractor::default();
    let mut file = upload(build_pdf(&["valid content"]));
    file.media_type = "application/octet-stream".to_string();

    let result = extractor.extract(Some(&file)).await;
    assert!(matches!(result, Err(ExtractError::InvalidInput(_))));
}
