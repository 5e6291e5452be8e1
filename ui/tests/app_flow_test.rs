//! End-to-end flows through the full app against a mock Gemini endpoint.

mod common;

use common::{TestCtx, official_site_reply};
use qrstudio_business::{AnalysisResult, QrSettings, Status};
use qrstudio_ui::state::StatusKind;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_app_starts_idle_with_placeholder() {
    let mut ctx = TestCtx::new_app(official_site_reply()).await;
    ctx.harness_mut().step();

    assert!(ctx.shows("Your QR code will appear here"));
    assert!(ctx.shows("Generate QR code"));
    assert_eq!(ctx.state().session.status(), Status::Idle);
}

#[tokio::test]
async fn test_empty_input_shows_notice_and_stays_idle() {
    let mut ctx = TestCtx::new_app(official_site_reply()).await;

    ctx.submit("   ");

    assert!(
        ctx.shows("Please enter some text or a URL."),
        "Validation notice should be displayed"
    );
    assert_eq!(ctx.state().session.status(), Status::Idle);

    ctx.click("OK");

    assert!(ctx.state().notice.is_none());
    assert!(!ctx.shows("Please enter some text or a URL."));
}

#[tokio::test]
async fn test_analysis_result_is_displayed() {
    let mut ctx = TestCtx::new_app(official_site_reply()).await;

    ctx.submit("https://example.com");
    assert!(
        ctx.wait_until(|s| s.session.status() == Status::Ready).await,
        "Analysis should finish"
    );

    let settings = &ctx.state().session.settings().clone();
    assert_eq!(settings.url, "https://example.com");
    assert_eq!(settings.label, "Official Site");
    assert_eq!(settings.primary_color, "#112233");
    assert_eq!(settings.margin, QrSettings::default().margin);

    assert!(ctx.shows("Scan to visit the official site."));
    assert!(ctx.shows("Download PNG"));
    assert!(ctx.shows("Customize"));
}

#[tokio::test]
async fn test_service_error_falls_back_but_still_reaches_ready() {
    let mut ctx = TestCtx::new_app(ResponseTemplate::new(500)).await;

    ctx.submit("some text");
    assert!(ctx.wait_until(|s| s.session.status() == Status::Ready).await);

    let fallback = AnalysisResult::fallback();
    assert_eq!(ctx.state().session.settings().label, fallback.label);
    assert!(ctx.shows(&fallback.description));
}

#[tokio::test]
async fn test_download_writes_png_named_after_label() {
    let mut ctx = TestCtx::new_app(official_site_reply()).await;
    ctx.submit("https://example.com");
    assert!(ctx.wait_until(|s| s.session.status() == Status::Ready).await);

    ctx.click("Download PNG");

    let file = ctx.save_dir().join("qr-code-official-site.png");
    let bytes = std::fs::read(&file).expect("PNG should be written");
    assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    assert_eq!(
        ctx.state().status_line.as_ref().map(|l| l.kind),
        Some(StatusKind::Info)
    );
    assert!(ctx.shows("Saved"));
}

#[tokio::test]
async fn test_copy_puts_image_on_clipboard() {
    let mut ctx = TestCtx::new_app(official_site_reply()).await;
    ctx.submit("https://example.com");
    assert!(ctx.wait_until(|s| s.session.status() == Status::Ready).await);

    ctx.click("Copy image");

    let image = ctx.clipboard().image().expect("image copied");
    assert_eq!(image.width, image.height);
    assert!(image.width > 0 && image.width <= 1024);
    assert!(ctx.shows("Copied QR code to clipboard"));
}

#[tokio::test]
async fn test_start_over_returns_to_idle() {
    let mut ctx = TestCtx::new_app(official_site_reply()).await;
    ctx.submit("https://example.com");
    assert!(ctx.wait_until(|s| s.session.status() == Status::Ready).await);

    ctx.click("Start over");

    assert_eq!(ctx.state().session.status(), Status::Idle);
    assert_eq!(ctx.state().session.input(), "");
    assert!(ctx.shows("Your QR code will appear here"));
}

#[tokio::test]
async fn test_editing_margin_keeps_other_settings() {
    let mut ctx = TestCtx::new_app(official_site_reply()).await;
    ctx.submit("https://example.com");
    assert!(ctx.wait_until(|s| s.session.status() == Status::Ready).await);
    let before = ctx.state().session.settings().clone();

    assert!(ctx.state_mut().session.edit_margin(0));
    ctx.harness_mut().step();

    let after = ctx.state().session.settings().clone();
    assert_eq!(after, QrSettings { margin: 0, ..before });
    assert!(ctx.shows("Scan to visit the official site."));
}
