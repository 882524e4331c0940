use indicatif::{ProgressBar, ProgressStyle};

pub fn create_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_strings(&["-", "\\", "|", "/"])
        .template("{msg} {spinner}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Run a request with a spinner shown while it is in flight.
pub async fn with_spinner<T, F>(message: &str, fut: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let spinner = create_spinner(message.to_string());
    let result = fut.await;
    spinner.finish_and_clear();
    result
}
