//! HTML element catalog.
//!
//! Every tag has a static descriptor (`DIV`) and a factory function (`div()`).
//! Typed attributes render in declaration order: the global attributes first,
//! then the tag's own, each list alphabetical.
//!
//! ```
//! use tagic::html::{head, html, title, BODY};
//!
//! let page = html().children([head().children(title().children("T")), BODY.with(None::<&str>)]);
//! assert_eq!(
//!     page.render().unwrap(),
//!     "<!DOCTYPE html>\n<html><head><title>T</title></head><body></body></html>"
//! );
//! ```

use crate::node::Node;
use crate::tag::{FieldSpec, TagDescriptor};

/// Attributes accepted by every HTML element
pub const GLOBAL_ATTRIBUTES: &[FieldSpec] = &[
    FieldSpec::new("accesskey"),
    FieldSpec::new("autocapitalize"),
    FieldSpec::new("autofocus"),
    FieldSpec::new("class_"),
    FieldSpec::new("contenteditable"),
    FieldSpec::new("dir"),
    FieldSpec::new("draggable"),
    FieldSpec::new("enterkeyhint"),
    FieldSpec::new("hidden"),
    FieldSpec::new("id"),
    FieldSpec::new("inert"),
    FieldSpec::new("inputmode"),
    FieldSpec::new("is_"),
    FieldSpec::new("itemid"),
    FieldSpec::new("itemprop"),
    FieldSpec::new("itemref"),
    FieldSpec::new("itemscope"),
    FieldSpec::new("itemtype"),
    FieldSpec::new("lang"),
    FieldSpec::new("nonce"),
    FieldSpec::new("part"),
    FieldSpec::new("popover"),
    FieldSpec::new("role"),
    FieldSpec::new("slot"),
    FieldSpec::new("spellcheck"),
    FieldSpec::new("style"),
    FieldSpec::new("tabindex"),
    FieldSpec::new("title"),
    FieldSpec::new("translate"),
];

/// Ordinary element: renders `<tag></tag>` when empty.
const fn element(name: &'static str) -> TagDescriptor {
    TagDescriptor {
        expand_empty: true,
        ..TagDescriptor::plain(Some(name))
    }
}

/// Void element: never has content, renders `<tag />`.
const fn void(name: &'static str) -> TagDescriptor {
    TagDescriptor {
        void: true,
        ..TagDescriptor::plain(Some(name))
    }
}

/// Raw-content element: text children only.
const fn raw(name: &'static str) -> TagDescriptor {
    TagDescriptor {
        raw_content: true,
        ..element(name)
    }
}

/// Document element: carries the doctype prolog.
const fn document(name: &'static str) -> TagDescriptor {
    TagDescriptor {
        doctype: true,
        ..element(name)
    }
}

macro_rules! field_spec {
    ($field:literal) => {
        FieldSpec::new($field)
    };
    ($field:literal, $rename:literal) => {
        FieldSpec::renamed($field, $rename)
    };
}

macro_rules! html_elements {
    (
        $(
            $func:ident / $desc:ident = $kind:ident($name:literal) {
                $($field:literal $(as $rename:literal)?),* $(,)?
            };
        )*
    ) => {
        $(
            #[doc = concat!("Descriptor of the `<", $name, ">` element")]
            pub static $desc: TagDescriptor = TagDescriptor {
                globals: GLOBAL_ATTRIBUTES,
                fields: &[$(field_spec!($field $(, $rename)?)),*],
                ..$kind($name)
            };

            #[doc = concat!("Build an empty `<", $name, ">` element")]
            pub fn $func() -> Node {
                Node::new(&$desc)
            }
        )*

        /// Descriptor of the HTML element `name`, if the catalog knows it.
        pub fn lookup(name: &str) -> Option<&'static TagDescriptor> {
            match name {
                $($name => Some(&$desc),)*
                _ => None,
            }
        }

        /// Names of every element in the catalog.
        pub const TAG_NAMES: &[&str] = &[$($name),*];
    };
}

html_elements! {
    // Document and metadata
    html / HTML = document("html") { "manifest", "xml_lang" as "xml:lang", "xmlns" };
    head / HEAD = element("head") {};
    title / TITLE = element("title") {};
    base / BASE = void("base") { "href", "target" };
    link / LINK = void("link") {
        "as_", "crossorigin", "href", "hreflang", "integrity", "media", "referrerpolicy",
        "rel", "sizes", "type_",
    };
    meta / META = void("meta") { "charset", "content", "http_equiv", "name" };
    style / STYLE = raw("style") { "media" };
    script / SCRIPT = raw("script") {
        "async_", "crossorigin", "defer", "integrity", "nomodule", "referrerpolicy", "src",
        "type_",
    };
    noscript / NOSCRIPT = element("noscript") {};
    template / TEMPLATE = element("template") {};

    // Sectioning
    body / BODY = element("body") {};
    main / MAIN = element("main") {};
    header / HEADER = element("header") {};
    footer / FOOTER = element("footer") {};
    nav / NAV = element("nav") {};
    section / SECTION = element("section") {};
    article / ARTICLE = element("article") {};
    aside / ASIDE = element("aside") {};
    address / ADDRESS = element("address") {};
    h1 / H1 = element("h1") {};
    h2 / H2 = element("h2") {};
    h3 / H3 = element("h3") {};
    h4 / H4 = element("h4") {};
    h5 / H5 = element("h5") {};
    h6 / H6 = element("h6") {};

    // Text content
    div / DIV = element("div") {};
    p / P = element("p") {};
    hr / HR = void("hr") {};
    pre / PRE = element("pre") {};
    blockquote / BLOCKQUOTE = element("blockquote") { "cite" };
    ul / UL = element("ul") {};
    ol / OL = element("ol") { "reversed", "start", "type_" };
    li / LI = element("li") { "value" };
    dl / DL = element("dl") {};
    dt / DT = element("dt") {};
    dd / DD = element("dd") {};
    figure / FIGURE = element("figure") {};
    figcaption / FIGCAPTION = element("figcaption") {};

    // Inline text
    a / A = element("a") {
        "download", "href", "hreflang", "ping", "referrerpolicy", "rel", "target", "type_",
    };
    span / SPAN = element("span") {};
    em / EM = element("em") {};
    strong / STRONG = element("strong") {};
    small / SMALL = element("small") {};
    code / CODE = element("code") {};
    b / B = element("b") {};
    i / I = element("i") {};
    u / U = element("u") {};
    s / S = element("s") {};
    q / Q = element("q") { "cite" };
    abbr / ABBR = element("abbr") {};
    time / TIME = element("time") { "datetime" };
    br / BR = void("br") {};
    wbr / WBR = void("wbr") {};

    // Media and embedded content
    img / IMG = void("img") {
        "alt", "crossorigin", "decoding", "height", "loading", "referrerpolicy", "sizes",
        "src", "srcset", "usemap", "width",
    };
    area / AREA = void("area") {
        "alt", "coords", "download", "href", "ping", "referrerpolicy", "rel", "shape", "target",
    };
    map / MAP = element("map") { "name" };
    audio / AUDIO = element("audio") {
        "autoplay", "controls", "crossorigin", "loop_", "muted", "preload", "src",
    };
    video / VIDEO = element("video") {
        "autoplay", "controls", "crossorigin", "height", "loop_", "muted", "playsinline",
        "poster", "preload", "src", "width",
    };
    source / SOURCE = void("source") {
        "height", "media", "sizes", "src", "srcset", "type_", "width",
    };
    track / TRACK = void("track") { "default", "kind", "label", "src", "srclang" };
    embed / EMBED = void("embed") { "height", "src", "type_", "width" };
    iframe / IFRAME = element("iframe") {
        "allow", "allowfullscreen", "height", "loading", "name", "referrerpolicy", "sandbox",
        "src", "srcdoc", "width",
    };
    canvas / CANVAS = element("canvas") { "height", "width" };

    // Tables
    table / TABLE = element("table") {};
    caption / CAPTION = element("caption") {};
    colgroup / COLGROUP = element("colgroup") { "span" };
    col / COL = void("col") { "span" };
    thead / THEAD = element("thead") {};
    tbody / TBODY = element("tbody") {};
    tfoot / TFOOT = element("tfoot") {};
    tr / TR = element("tr") {};
    th / TH = element("th") { "abbr", "colspan", "headers", "rowspan", "scope" };
    td / TD = element("td") { "colspan", "headers", "rowspan" };

    // Forms
    form / FORM = element("form") {
        "accept_charset", "action", "autocomplete", "enctype", "method", "name", "novalidate",
        "rel", "target",
    };
    label / LABEL = element("label") { "for_" };
    input / INPUT = void("input") {
        "accept", "alt", "autocomplete", "checked", "dirname", "disabled", "form", "list",
        "max", "maxlength", "min", "minlength", "multiple", "name", "pattern", "placeholder",
        "readonly", "required", "size", "src", "step", "type_", "value",
    };
    button / BUTTON = element("button") { "disabled", "form", "name", "type_", "value" };
    select / SELECT = element("select") {
        "autocomplete", "disabled", "form", "multiple", "name", "required", "size",
    };
    option / OPTION = element("option") { "disabled", "label", "selected", "value" };
    optgroup / OPTGROUP = element("optgroup") { "disabled", "label" };
    textarea / TEXTAREA = element("textarea") {
        "autocomplete", "cols", "disabled", "form", "maxlength", "minlength", "name",
        "placeholder", "readonly", "required", "rows", "wrap",
    };
    fieldset / FIELDSET = element("fieldset") { "disabled", "form", "name" };
    legend / LEGEND = element("legend") {};
    output / OUTPUT = element("output") { "for_", "form", "name" };
    progress / PROGRESS = element("progress") { "max", "value" };

    // Interactive
    details / DETAILS = element("details") { "name", "open" };
    summary / SUMMARY = element("summary") {};
    dialog / DIALOG = element("dialog") { "open" };
}
