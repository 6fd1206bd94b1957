//! The note document and its page variants.

use crate::i18n::Lang;
use crate::models::{Mode, Note, NoteMeta};
use crate::notes::{html_escape, js_string, render_preview};

use super::components::{footer, modals, top_bar, ICON_SPRITE};
use super::editor_js::EDITOR_JS;
use super::styles::STYLE;

/// Everything the document template needs. Variants fill in the flags.
#[derive(Debug, Clone)]
pub struct PageData<'a> {
    pub lang: Lang,
    pub title: &'a str,
    pub content: &'a str,
    pub meta: &'a NoteMeta,
    pub tips: Option<&'a str>,
    pub is_edit: bool,
    pub show_pw_prompt: bool,
    pub show_app_auth_prompt: bool,
    pub return_url: Option<&'a str>,
    pub now: i64,
}

impl<'a> PageData<'a> {
    pub fn new(lang: Lang, title: &'a str, meta: &'a NoteMeta, now: i64) -> Self {
        Self {
            lang,
            title,
            content: "",
            meta,
            tips: None,
            is_edit: false,
            show_pw_prompt: false,
            show_app_auth_prompt: false,
            return_url: None,
            now,
        }
    }
}

static EMPTY_META: NoteMeta = NoteMeta {
    pw: None,
    mode: None,
    share: None,
    update_at: None,
};

// ============================================================================
// Variants
// ============================================================================

/// Editable note.
pub fn edit(lang: Lang, title: &str, note: &Note, now: i64) -> String {
    render_page(&PageData {
        content: &note.value,
        is_edit: true,
        ..PageData::new(lang, title, &note.metadata, now)
    })
}

/// Read-only shared view.
pub fn share(lang: Lang, title: &str, note: &Note, now: i64) -> String {
    render_page(&PageData {
        content: &note.value,
        ..PageData::new(lang, title, &note.metadata, now)
    })
}

/// Password challenge. Never receives the note content.
pub fn need_passwd(lang: Lang, title: &str, now: i64) -> String {
    render_page(&PageData {
        tips: Some(lang.strings().tip_encrypt),
        show_pw_prompt: true,
        ..PageData::new(lang, title, &EMPTY_META, now)
    })
}

pub fn app_auth(lang: Lang, title: &str, return_url: &str, now: i64) -> String {
    render_page(&PageData {
        tips: Some(lang.strings().tip_app_auth),
        show_app_auth_prompt: true,
        return_url: Some(return_url),
        ..PageData::new(lang, title, &EMPTY_META, now)
    })
}

pub fn page_404(lang: Lang, now: i64) -> String {
    render_page(&PageData {
        tips: Some(lang.strings().tip_404),
        ..PageData::new(lang, "404", &EMPTY_META, now)
    })
}

// ============================================================================
// Document Template
// ============================================================================

pub fn render_page(data: &PageData<'_>) -> String {
    let t = data.lang.strings();
    let mode = data.meta.mode();
    let is_md = mode == Mode::Md;

    let tips_html = match data.tips {
        Some(tips) => format!(r#"<div class="tips" role="alert">{}</div>"#, html_escape(tips)),
        None => String::new(),
    };

    let divide_line = if data.is_edit && is_md {
        r#"<div class="divide-line" aria-hidden="true"></div>"#
    } else {
        ""
    };

    // Plain notes being edited need no preview pane.
    let preview = if data.tips.is_some() || (data.is_edit && !is_md) {
        String::new()
    } else {
        format!(
            r#"<div id="preview-{}" class="contents" role="article">{}</div>"#,
            mode.as_str(),
            render_preview(data.content, mode)
        )
    };

    let mut vendor_scripts = String::new();
    if is_md || data.meta.is_shared() {
        vendor_scripts.push_str(r#"<script src="/static/js/purify.min.js"></script>"#);
    }
    if is_md {
        vendor_scripts.push_str(r#"<script src="/static/js/marked.min.js"></script>"#);
    }
    if data.is_edit {
        vendor_scripts.push_str(r#"<script src="/static/js/qrcode.min.js"></script>"#);
    }

    let client_strings =
        serde_json::to_string(&t.client).unwrap_or_else(|_| "{}".to_string()).replace("</", "<\\/");

    let mut prompt = String::new();
    if data.show_pw_prompt {
        prompt.push_str("<script>passwdPrompt()</script>");
    }
    if data.show_app_auth_prompt {
        prompt.push_str(&format!(
            "<script>appPasswordPrompt({})</script>",
            js_string(data.return_url.unwrap_or("/"))
        ));
    }

    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0, viewport-fit=cover" />
    <meta name="description" content="Cloud notepad with password protection and markdown support" />
    <title>{title} - Cloud Notepad</title>
    <link href="/favicon.ico" rel="shortcut icon" type="image/ico" />
    <style>{style}</style>
</head>
<body>
    <a href="#contents" class="skip-link">Skip to content</a>
    <div style="display: none;">{sprite}</div>
    {top_bar}
    <div class="note-container" role="document">
        <div class="stack"><div class="layer_1"><div class="layer_2"><div class="layer_3">
            {tips}
            <textarea id="contents" class="contents {hide}" spellcheck="true" placeholder="{placeholder}" aria-multiline="true">{content}</textarea>
            {divide_line}
            {preview}
        </div></div></div></div>
    </div>
    <div id="loading" role="status" aria-live="polite"></div>
    <div class="toast-container" id="toasts" role="region" aria-live="polite"></div>
    {modals}
    {footer}
    {vendor_scripts}
    <script>window.SCN_I18N = {client_strings};</script>
    <script>{editor_js}</script>
    {prompt}
</body>
</html>"##,
        lang = data.lang.code(),
        title = html_escape(data.title),
        style = STYLE,
        sprite = ICON_SPRITE,
        top_bar = if data.is_edit { top_bar(t) } else { String::new() },
        tips = tips_html,
        hide = if data.is_edit { "" } else { "hide" },
        placeholder = html_escape(t.empty_placeholder),
        content = html_escape(data.content),
        divide_line = divide_line,
        preview = preview,
        modals = modals(t),
        footer = footer(t, data.meta, data.is_edit, data.now),
        vendor_scripts = vendor_scripts,
        client_strings = client_strings,
        editor_js = EDITOR_JS,
        prompt = prompt,
    )
}
