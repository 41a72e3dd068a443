#![no_main]

use article_params::ArticleParams;
use article_params::config::AppConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes as the config file and as an applied configuration
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<AppConfig>(s) {
            // Any accepted layout must yield a usable region
            let _ = config.layout.rect();
        }
        let _result: Result<ArticleParams, _> = serde_json::from_str(s);
    }
});
