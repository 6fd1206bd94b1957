//! CSS for every page variant.

pub const STYLE: &str = r#"
:root {
    --bg: #fdf6e3;
    --paper: #ffffff;
    --fg: #4a4f55;
    --muted: #93a1a1;
    --border: #e6e0cf;
    --accent: #268bd2;
    --accent-hover: #2aa198;
    --danger: #dc322f;
    --ok: #859900;
}

* { box-sizing: border-box; }

html, body {
    margin: 0;
    height: 100%;
    background: var(--bg);
    color: var(--fg);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
}

.skip-link { position: absolute; left: -999px; }
.skip-link:focus { left: 1rem; top: 1rem; }

.note-container {
    position: absolute;
    top: 1rem;
    right: 1rem;
    bottom: 3.5rem;
    left: 1rem;
}

.stack, .layer_1, .layer_2, .layer_3 { height: 100%; }

.layer_3 {
    display: flex;
    background: var(--paper);
    border: 1px solid var(--border);
    border-radius: 6px;
    overflow: hidden;
}

.contents {
    flex: 1;
    height: 100%;
    padding: 1rem 1.25rem;
    margin: 0;
    border: 0;
    outline: none;
    overflow-y: auto;
    font-size: 1rem;
    line-height: 1.6;
    color: var(--fg);
    background: transparent;
    resize: none;
}

textarea.contents { font-family: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace; }
.contents.hide { display: none; }
.divide-line { width: 1px; background: var(--border); }
#preview-plain { white-space: pre-wrap; word-break: break-word; }
#preview-md img { max-width: 100%; }
#preview-md pre { background: #eee8d5; padding: 0.75rem; overflow-x: auto; }

.tips {
    position: absolute;
    inset: 0;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 1.1rem;
    color: var(--muted);
    text-align: center;
    padding: 1rem;
}

#loading {
    display: none;
    position: fixed;
    top: 1.5rem;
    right: 1.5rem;
    width: 0.75rem;
    height: 0.75rem;
    border-radius: 50%;
    background: var(--accent);
}

.footer {
    position: fixed;
    left: 1rem;
    right: 1rem;
    bottom: 0.75rem;
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 1rem;
    font-size: 0.85rem;
    color: var(--muted);
}

.opt { display: flex; align-items: center; gap: 0.75rem; flex-wrap: wrap; }
.footer-right { display: flex; gap: 1rem; }

.opt-button, .top-bar button {
    display: inline-flex;
    align-items: center;
    gap: 0.35rem;
    padding: 0.3rem 0.7rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--paper);
    color: var(--fg);
    cursor: pointer;
    font-size: 0.85rem;
}
.opt-button:hover, .top-bar button:hover { border-color: var(--accent); color: var(--accent); }

.icon { width: 1rem; height: 1rem; }

.switch-group { display: inline-flex; align-items: center; gap: 0.35rem; }
.switch { position: relative; display: inline-block; width: 2rem; height: 1.1rem; }
.switch input { opacity: 0; width: 0; height: 0; }
.switch-slider {
    position: absolute;
    inset: 0;
    border-radius: 1rem;
    background: var(--border);
    cursor: pointer;
    transition: background 0.2s;
}
.switch-slider::before {
    content: "";
    position: absolute;
    left: 0.15rem;
    top: 0.15rem;
    width: 0.8rem;
    height: 0.8rem;
    border-radius: 50%;
    background: #fff;
    transition: transform 0.2s;
}
.switch input:checked + .switch-slider { background: var(--accent); }
.switch input:checked + .switch-slider::before { transform: translateX(0.9rem); }

.top-bar {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    height: 3rem;
    padding: 0 0.75rem;
    justify-content: space-between;
    align-items: center;
    background: var(--paper);
    border-bottom: 1px solid var(--border);
    z-index: 10;
}
.top-bar-left, .top-bar-right { display: flex; gap: 0.5rem; align-items: center; }

.modal { display: none; position: fixed; inset: 0; z-index: 20; }
.modal-mask { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.35); }
.modal-content {
    position: relative;
    max-width: 28rem;
    margin: 20vh auto 0;
    padding: 1.5rem;
    background: var(--paper);
    border-radius: 6px;
}
.modal-body { display: flex; gap: 0.5rem; align-items: center; flex-direction: column; }
.modal-body input { width: 100%; padding: 0.4rem; border: 1px solid var(--border); border-radius: 4px; }
.close-btn { position: absolute; right: 0.75rem; top: 0.5rem; cursor: pointer; color: var(--muted); }
.qr-tip { color: var(--muted); font-size: 0.85rem; }

.toast-container {
    position: fixed;
    top: 1rem;
    left: 50%;
    transform: translateX(-50%);
    display: flex;
    flex-direction: column;
    gap: 0.5rem;
    z-index: 30;
}
.toast {
    padding: 0.5rem 1rem;
    border-radius: 4px;
    background: var(--fg);
    color: #fff;
    font-size: 0.9rem;
    box-shadow: 0 2px 8px rgba(0, 0, 0, 0.15);
}
.toast.error { background: var(--danger); }
.toast.success { background: var(--ok); }

@media (max-width: 640px) {
    .footer { flex-direction: column; align-items: flex-start; }
    .note-container { bottom: 6rem; }
}
"#;
