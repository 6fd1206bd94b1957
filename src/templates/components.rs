//! Shared HTML components: icon sprite, toolbar footer, modals and the mobile top bar.

use crate::i18n::Strings;
use crate::models::{Mode, NoteMeta};
use crate::notes::{html_escape, relative_time};

// ============================================================================
// Icons
// ============================================================================

pub const ICON_SPRITE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg">
  <symbol id="icon-lock" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <rect x="3" y="11" width="18" height="11" rx="2" ry="2"/><path d="M7 11V7a5 5 0 0 1 10 0v4"/>
  </symbol>
  <symbol id="icon-qrcode" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <rect x="3" y="3" width="7" height="7"/><rect x="14" y="3" width="7" height="7"/><rect x="14" y="14" width="7" height="7"/><rect x="3" y="14" width="7" height="7"/>
  </symbol>
  <symbol id="icon-download" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/><polyline points="7 10 12 15 17 10"/><line x1="12" y1="15" x2="12" y2="3"/>
  </symbol>
  <symbol id="icon-copy" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <rect x="9" y="9" width="13" height="13" rx="2" ry="2"/><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>
  </symbol>
  <symbol id="icon-edit" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <path d="M11 4H4a2 2 0 0 0-2 2v14a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2v-7"/><path d="M18.5 2.5a2.121 2.121 0 0 1 3 3L12 15l-4 1 1-4 9.5-9.5z"/>
  </symbol>
  <symbol id="icon-check" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
    <polyline points="20 6 9 17 4 12"/>
  </symbol>
</svg>"#;

fn icon(name: &str) -> String {
    format!(r##"<svg class="icon" aria-hidden="true"><use href="#icon-{}"></use></svg>"##, name)
}

// ============================================================================
// Footer Toolbar
// ============================================================================

fn switcher(label: &str, on: bool, class: &str) -> String {
    format!(
        r#"<label class="switch {class}">
    <input type="checkbox" {checked} role="switch" aria-checked="{on}" aria-label="{label}">
    <span class="switch-slider"></span>
</label>"#,
        class = class,
        checked = if on { "checked" } else { "" },
        on = on,
        label = html_escape(label),
    )
}

/// Toolbar (edit pages only) plus the word count and last-modified status.
pub fn footer(t: &Strings, meta: &NoteMeta, is_edit: bool, now: i64) -> String {
    let toolbar = if is_edit {
        let pw_label = if meta.is_protected() { t.change_pw } else { t.set_pw };
        format!(
            r#"<div class="opt">
        <button class="opt-button opt-pw" aria-label="{pw_label}">{lock} {pw_label}</button>
        <div class="switch-group"><span class="opt-desc">Markdown</span>{md_switch}</div>
        <div class="switch-group"><span class="opt-desc">{share}</span>{share_switch}</div>
        <button class="opt-button opt-qr" title="{qr}" aria-label="{qr}">{qr_icon} {qr}</button>
        <button class="opt-button opt-export" title="{export}" aria-label="{export}">{dl_icon} {export}</button>
    </div>"#,
            pw_label = pw_label,
            lock = icon("lock"),
            md_switch = switcher("Markdown", meta.mode() == Mode::Md, "opt-mode"),
            share = t.share,
            share_switch = switcher(t.share, meta.is_shared(), "opt-share"),
            qr = t.qr_code,
            qr_icon = icon("qrcode"),
            export = t.export_note,
            dl_icon = icon("download"),
        )
    } else {
        String::new()
    };

    let word_count = if is_edit {
        format!(
            r#"<span class="word-count" id="wordCount" data-chars="{chars}" data-words="{words}">{chars}: 0 | {words}: 0</span>"#,
            chars = t.chars,
            words = t.words
        )
    } else {
        String::new()
    };

    let last_modified = match meta.update_at {
        Some(at) => format!(
            r#"<span class="last-modified">{} {}</span>"#,
            t.last_modified,
            relative_time(at, now)
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="footer" role="toolbar">
    {toolbar}
    <div class="footer-right" role="status" aria-live="polite">{word_count}{last_modified}</div>
</div>"#
    )
}

// ============================================================================
// Modals
// ============================================================================

pub fn modals(t: &Strings) -> String {
    format!(
        r#"<div class="modal share-modal">
    <div class="modal-mask"></div>
    <div class="modal-content">
        <span class="close-btn">x</span>
        <div class="modal-body">
            <input type="text" readonly value="" />
            <button class="opt-button">{copy}</button>
        </div>
    </div>
</div>
<div class="modal qr-modal">
    <div class="modal-mask"></div>
    <div class="modal-content">
        <span class="close-btn">x</span>
        <div class="modal-body">
            <div id="qrcode"></div>
            <p class="qr-tip">{scan}</p>
        </div>
    </div>
</div>"#,
        copy = t.copy,
        scan = t.scan_to_view,
    )
}

// ============================================================================
// Mobile Top Bar
// ============================================================================

pub fn top_bar(t: &Strings) -> String {
    format!(
        r#"<div class="top-bar" id="topBar" style="display: none;" role="banner">
    <div class="top-bar-left">
        <button id="btnCopyAll">{copy_icon} {copy_all}</button>
        <button id="btnEdit">{edit_icon} {edit}</button>
        <button id="btnDone" style="display: none;">{check_icon} {done}</button>
    </div>
    <div class="top-bar-right">
        <button id="btnQrMobile" title="{qr}" aria-label="{qr}">{qr_icon}</button>
        <button id="btnExportMobile" title="{export}" aria-label="{export}">{dl_icon}</button>
    </div>
</div>"#,
        copy_icon = icon("copy"),
        copy_all = t.copy_all,
        edit_icon = icon("edit"),
        edit = t.edit,
        check_icon = icon("check"),
        done = t.done,
        qr = t.qr_code,
        qr_icon = icon("qrcode"),
        export = t.export_note,
        dl_icon = icon("download"),
    )
}
