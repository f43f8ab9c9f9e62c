use shared_types::{Notice, NoticeVariant};
use shared_ui::{show_toast, ToastTone, Toasts};

#[cfg(feature = "desktop")]
const APP_NAME: &str = "CGM";

fn tone(variant: NoticeVariant) -> ToastTone {
    match variant {
        NoticeVariant::Success => ToastTone::Success,
        NoticeVariant::Error => ToastTone::Error,
    }
}

/// Errors are also pushed to the desktop so they are not missed when the
/// window is in the background.
fn should_push(variant: NoticeVariant) -> bool {
    variant == NoticeVariant::Error
}

/// Show a notice as a toast.
pub fn notify(toasts: Toasts, notice: &Notice) {
    match notice.variant {
        NoticeVariant::Success => tracing::info!(description = %notice.description, "notice"),
        NoticeVariant::Error => tracing::warn!(description = %notice.description, "error notice"),
    }
    show_toast(toasts, tone(notice.variant), &notice.title, &notice.description);
    if should_push(notice.variant) {
        send(&notice.title, &notice.description);
    }
}

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "failed to show desktop notification");
        }
    }
}
