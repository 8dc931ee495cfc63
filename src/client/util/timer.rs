use std::time::Duration;

use dioxus::prelude::*;

/// Suspends the current task for `duration` using the browser's `setTimeout`
pub async fn sleep(duration: Duration) {
    let script = format!(
        "await new Promise((resolve) => setTimeout(resolve, {})); return null;",
        duration.as_millis()
    );

    let _ = document::eval(&script).await;
}
