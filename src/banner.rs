//! Startup banner.

use crate::consts::{AUTHOR, REPO};

/// Process configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub mode: &'a str,
    pub model: &'a str,
    pub database: &'a str,
}

pub fn render_banner(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║               M A S A L               ║
   ║    stories and questions, on demand   ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   repo      {}
   mode      {}
   model     {}
   database  {}
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        REPO,
        info.mode,
        info.model,
        info.database,
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", render_banner(info));
}
