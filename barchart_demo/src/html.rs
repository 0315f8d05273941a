// Copyright 2025 the Barchart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fmt::Write as _;

use crate::svg::escape_xml;

#[derive(Debug)]
pub(crate) struct Section {
    pub title: String,
    pub caption: String,
    pub svg: String,
}

pub(crate) fn render_report(title: &str, sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(out, "<title>{}</title>", escape_xml(title));
    out.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 24px; }\n\
         section { margin-bottom: 32px; }\n\
         .chart { overflow-x: auto; border: 1px solid #ddd; padding: 8px; }\n\
         p { color: #555; }\n\
         </style>\n</head>\n<body>\n",
    );
    let _ = writeln!(out, "<h1>{}</h1>", escape_xml(title));
    for section in sections {
        out.push_str("<section>\n");
        let _ = writeln!(out, "<h2>{}</h2>", escape_xml(&section.title));
        let _ = writeln!(out, "<p>{}</p>", escape_xml(&section.caption));
        out.push_str("<div class=\"chart\">\n");
        out.push_str(&section.svg);
        out.push_str("</div>\n</section>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}
