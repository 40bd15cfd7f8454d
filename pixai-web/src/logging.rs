use pixai_core::AppConfig;

pub fn init_logging(config: &AppConfig) {
    // a second init (hot reload) fails harmlessly
    let _ = dioxus::logger::init(config.level());
}
