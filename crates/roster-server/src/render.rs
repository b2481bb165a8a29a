//! HTML rendering for the index page.

use std::fmt::Write;

use roster_model::{FacetField, Record};
use roster_normalization::FLAG_FIELD;
use roster_query::Facets;

/// Escapes text for use in HTML content and quoted attribute values.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn facet_label(field: FacetField) -> &'static str {
    match field {
        FacetField::Country => "All countries",
        FacetField::City => "All cities",
        FacetField::Class => "All classes",
        FacetField::Industry => "All industries",
    }
}

fn render_select(out: &mut String, field: FacetField, values: &[String]) {
    let key = field.filter_field().key();
    let _ = write!(
        out,
        "<select class=\"search-input\" id=\"filter-{key}\" name=\"{key}\">\
         <option value=\"\">{}</option>",
        facet_label(field)
    );
    for value in values {
        let value = escape_html(value);
        let _ = write!(out, "<option value=\"{value}\">{value}</option>");
    }
    out.push_str("</select>");
}

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() { "N/A" } else { value }
}

/// Renders one member card. `id` is the member's position in the roster.
pub fn render_member_card(out: &mut String, id: usize, member: &Record) {
    let name = member.text("Name");
    let title = member.text("Title");
    let organization = member.text("Organization");
    let city = member.text("City");
    let country = member.text("Country");
    let class = member.text("Class");
    let industry = member.text("Industry");
    let flag = member.text(FLAG_FIELD);
    let _ = write!(
        out,
        "<article class=\"member-card\" data-member-id=\"{id}\">\
<h3 class=\"member-name\">{}</h3>\
<p class=\"member-title\">{}</p>\
<p class=\"member-org\">{}</p>\
<p class=\"member-location\">{} {}, {}</p>\
<p class=\"member-class\">Class of {}</p>\
<p class=\"member-industry\">{}</p>\
</article>",
        escape_html(or_placeholder(&name)),
        escape_html(or_placeholder(&title)),
        escape_html(or_placeholder(&organization)),
        escape_html(&flag),
        escape_html(or_placeholder(&city)),
        escape_html(or_placeholder(&country)),
        escape_html(or_placeholder(&class)),
        escape_html(or_placeholder(&industry)),
    );
}

/// Renders the full index page for flag-decorated `members`.
pub fn render_index(members: &[Record], facets: &Facets) -> String {
    let mut out = String::with_capacity(4096 + members.len() * 512);
    out.push_str(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>Member Directory</title></head><body>",
    );
    let _ = write!(
        out,
        "<header><h1>Member Directory</h1>\
<p id=\"result-count\" data-total=\"{total}\">Showing {total} of {total} members</p></header>",
        total = members.len()
    );

    out.push_str("<form id=\"search-form\" autocomplete=\"off\">");
    out.push_str(
        "<input type=\"text\" class=\"search-input\" id=\"filter-name\" name=\"name\" \
         placeholder=\"Search by name\">\
         <input type=\"text\" class=\"search-input\" id=\"filter-title\" name=\"title\" \
         placeholder=\"Search by title\">",
    );
    for field in FacetField::ALL {
        render_select(&mut out, field, facets.values(field));
    }
    out.push_str("<button type=\"button\" id=\"clear-filters\">Clear filters</button></form>");

    out.push_str("<section id=\"members\">");
    if members.is_empty() {
        out.push_str("<p class=\"empty\">No members found.</p>");
    }
    for (id, member) in members.iter().enumerate() {
        render_member_card(&mut out, id, member);
    }
    out.push_str("</section>");

    out.push_str(
        "<dialog id=\"member-modal\"><article>\
<img id=\"modal-image\" alt=\"\" width=\"150\" height=\"150\">\
<h2 id=\"modal-name\"></h2><p id=\"modal-title\"></p><p id=\"modal-org\"></p>\
<p id=\"modal-industry\"></p><p id=\"modal-location\"></p><p id=\"modal-class\"></p>\
<a id=\"modal-linkedin\" target=\"_blank\" rel=\"noopener\" hidden>LinkedIn</a>\
<form method=\"dialog\"><button>Close</button></form></article></dialog>\
<script src=\"/static/js/main.js\"></script></body></html>",
    );
    out
}
