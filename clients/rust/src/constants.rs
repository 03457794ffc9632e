use once_cell::sync::Lazy;
use url::Url;

pub static BASE_URL_ENV: &str = "DEEL_BASE_URL";
pub static DEFAULT_BASE_URL: Lazy<Url> = Lazy::new(|| {
    // Production unless the build overrides it with DEEL_DEFAULT_BASE_URL at
    // compile time.
    let url_str = std::option_env!("DEEL_DEFAULT_BASE_URL")
        .unwrap_or("https://api.letsdeel.com");
    Url::parse(url_str).expect("DEFAULT_BASE_URL")
});
pub static SANDBOX_BASE_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse("https://api-sandbox.demo.deel.com").expect("SANDBOX_BASE_URL")
});
