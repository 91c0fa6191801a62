//! Show list and embed widget URLs for the page's set cards.
//!
//! URL construction is pure string work so it stays host-testable; the
//! web frontend only plugs the results into iframes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShowSource {
    Mixcloud,
    Soundcloud,
}

#[derive(Clone, Copy, Debug)]
pub struct Show {
    pub title: &'static str,
    pub url: &'static str,
    pub source: ShowSource,
}

impl Show {
    pub fn source_label(&self) -> &'static str {
        match self.source {
            ShowSource::Mixcloud => "Mixcloud",
            ShowSource::Soundcloud => "SoundCloud",
        }
    }

    pub fn embed_src(&self) -> String {
        match self.source {
            ShowSource::Mixcloud => mixcloud_embed_src(self.url),
            ShowSource::Soundcloud => soundcloud_embed_src(self.url),
        }
    }
}

pub const SHOWS: &[Show] = &[
    Show {
        title: "Nahuel - Sticky fingers",
        url: "https://www.mixcloud.com/amooro/deep-fingers/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - TRICKS OR TREAT?",
        url: "https://www.mixcloud.com/amooro/amoro-tricks-or-treat/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - P A S S P O R T",
        url: "https://www.mixcloud.com/amooro/a-m-o-r-o-p-a-s-s-p-o-r-t/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - D A C I D",
        url: "https://www.mixcloud.com/amooro/a-m-o-r-o-d-a-c-i-d/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - S T R A W B E R R Y M O O N 023*",
        url: "https://www.mixcloud.com/amooro/%E2%B2%81-%E2%B2%99-%E2%B2%9F-%EA%9E%85-%E2%B2%9F-s-t-r-a-w-b-e-r-r-y-m-o-o-n-023/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - D A R K F A C E",
        url: "https://www.mixcloud.com/amooro/a-m-o-r-o-d-a-r-k-f-a-c-e/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "W E L C O M E S U N R I S E [chapterONE]",
        url: "https://www.mixcloud.com/amooro/w-e-l-c-o-m-e-s-u-n-r-i-s-e-chapterone/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - 7.609.",
        url: "https://www.mixcloud.com/amooro/a-m-o-r-o-7609/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - S O C O L",
        url: "https://www.mixcloud.com/amooro/a-m-o-r-o-s-o-c-o-l/",
        source: ShowSource::Mixcloud,
    },
    Show {
        title: "Nahuel - 1.984",
        url: "https://www.mixcloud.com/amooro/a-m-o-r-o-a-t-m-o-s-f-e-r/",
        source: ShowSource::Mixcloud,
    },
];

/// The Mixcloud widget expects the show's percent-encoded feed path.
pub fn mixcloud_embed_src(show_url: &str) -> String {
    format!(
        "https://www.mixcloud.com/widget/iframe/?hide_cover=1&light=1&feed={}",
        percent_encode(url_path(show_url))
    )
}

/// The SoundCloud player embeds the full track URL via its API widget.
pub fn soundcloud_embed_src(show_url: &str) -> String {
    format!(
        "https://w.soundcloud.com/player/?url={}&color=%23ff5500&auto_play=false&hide_related=true&show_comments=false&show_user=true&show_reposts=false&show_teaser=false&visual=false",
        percent_encode(show_url)
    )
}

/// Path component of an absolute URL (`"/"` when it has none).
fn url_path(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    rest.find('/').map_or("/", |i| &rest[i..])
}

/// Percent-encoding with the unreserved set of `encodeURIComponent`.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
