//! Page footer: copyright line and outbound links.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::content::social_directory;
use crate::util::clock;

/// `(label, href)` pairs shown in the footer.
pub const FOOTER_LINKS: [(&str, &str); 3] = [
    ("Github", "https://github.com/AndersonHJB/"),
    ("Twitter", "https://x.com/huangjiarongbao"),
    ("Contact", "https://comment.bornforthis.cn/"),
];

pub fn copyright_line(year: i32, site: &str) -> String {
    format!("© {year} {site}. All rights reserved.")
}

#[component]
pub fn Footer() -> impl IntoView {
    let site = &social_directory().official_site;
    let line = copyright_line(clock::current_year(), &site.domain);

    view! {
        <footer class="site-footer">
            <p class="site-footer__copyright">{line}</p>
            <ul class="site-footer__links">
                {FOOTER_LINKS
                    .iter()
                    .map(|(label, href)| view! {
                        <li>
                            <a class="site-footer__link" href=*href target="_blank" rel="noopener noreferrer">{*label}</a>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </footer>
    }
}
