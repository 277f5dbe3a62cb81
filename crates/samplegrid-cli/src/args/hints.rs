pub mod cmd {
    pub const INIT: &str = "samplegrid init";
    pub const LIST: &str = "samplegrid list";
    pub const SEARCH: &str = "samplegrid search <QUERY>";
    pub const SHOW: &str = "samplegrid show <SAMPLE_ID>";
    pub const ADD: &str = "samplegrid add <SAMPLE_ID> --set material=<VALUE>";
    pub const BROWSE: &str = "samplegrid browse";
    pub const EXPORT: &str = "samplegrid export --output samples.csv";
}

pub mod fmt {
    pub fn show(sample_id: &str) -> String {
        format!("samplegrid show {}", sample_id)
    }
}
