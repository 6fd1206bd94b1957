//! Browser script for note pages.
//!
//! Binds the textarea and toolbar to the JSON endpoints: throttled autosave,
//! live preview, password and settings changes, share/QR modals, export and
//! clipboard helpers. Page text comes from `window.SCN_I18N`.

pub const EDITOR_JS: &str = r##"
(function () {
    const I18N = window.SCN_I18N || {};
    const MAX_PROMPT_ATTEMPTS = 5;
    const SAVE_INTERVAL_MS = 300;

    const t = key => I18N[key] || key;
    const $ = selector => document.querySelector(selector);

    // ------------------------------------------------------------------
    // Toasts
    // ------------------------------------------------------------------

    const toast = (message, type) => {
        const container = $('#toasts');
        if (!container) return;
        const node = document.createElement('div');
        node.className = 'toast ' + (type || '');
        node.setAttribute('role', 'alert');
        node.textContent = message;
        container.appendChild(node);
        window.setTimeout(() => node.remove(), 2500);
    };

    const errHandle = err => toast(t('err') + ': ' + err, 'error');

    const postJSON = (url, body) => window.fetch(url, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify(body),
    }).then(res => res.json());

    // Runs at most once per interval; later calls in the window are folded in.
    const throttle = (func, delay) => {
        let tid = null;
        return (...args) => {
            if (tid) return;
            tid = window.setTimeout(() => {
                tid = null;
                func(...args);
            }, delay);
        };
    };

    const notePath = () => window.location.pathname.replace(/\/+$/, '');

    // ------------------------------------------------------------------
    // Password prompts
    // ------------------------------------------------------------------

    const appPasswordPrompt = (returnUrl, attempt) => {
        attempt = attempt || 1;
        if (attempt > MAX_PROMPT_ATTEMPTS) {
            toast(t('too_many_attempts'), 'error');
            return;
        }
        const passwd = window.prompt(t('enter_app_pw'));
        if (passwd == null) {
            window.history.back();
            return;
        }
        if (!passwd.trim()) {
            toast(t('pw_empty'), 'error');
            return appPasswordPrompt(returnUrl, attempt + 1);
        }
        postJSON('/auth/app', { passwd, returnUrl })
            .then(res => {
                if (res.err !== 0) {
                    errHandle(res.msg);
                    return appPasswordPrompt(returnUrl, attempt + 1);
                }
                if (res.data && res.data.redirect) {
                    window.location.href = res.data.redirect;
                }
            })
            .catch(err => {
                errHandle(err);
                appPasswordPrompt(returnUrl, attempt + 1);
            });
    };

    const passwdPrompt = attempt => {
        attempt = attempt || 1;
        if (attempt > MAX_PROMPT_ATTEMPTS) {
            toast(t('too_many_attempts'), 'error');
            return;
        }
        const passwd = window.prompt(t('enter_pw'));
        if (passwd == null) return;
        if (!passwd.trim()) {
            toast(t('pw_empty'), 'error');
            return passwdPrompt(attempt + 1);
        }
        postJSON(notePath() + '/auth', { passwd })
            .then(res => {
                if (res.err !== 0) {
                    errHandle(res.msg);
                    return passwdPrompt(attempt + 1);
                }
                if (res.data && res.data.refresh) {
                    window.location.reload();
                }
            })
            .catch(err => errHandle(err));
    };

    window.appPasswordPrompt = appPasswordPrompt;
    window.passwdPrompt = passwdPrompt;

    // ------------------------------------------------------------------
    // Preview, counters, clipboard, export
    // ------------------------------------------------------------------

    const renderMarkdown = (node, text) => {
        if (!node || !window.marked) return;
        const html = window.marked.parse(text);
        node.innerHTML = window.DOMPurify ? window.DOMPurify.sanitize(html) : html;
    };

    const updateWordCount = text => {
        const node = $('#wordCount');
        if (!node) return;
        const words = text.trim() ? text.trim().split(/\s+/).length : 0;
        node.textContent = node.dataset.chars + ': ' + Array.from(text).length
            + ' | ' + node.dataset.words + ': ' + words;
    };

    const copyText = text => {
        if (navigator.clipboard && navigator.clipboard.writeText) {
            return navigator.clipboard.writeText(text);
        }
        return new Promise((resolve, reject) => {
            const area = document.createElement('textarea');
            area.value = text;
            document.body.appendChild(area);
            area.select();
            try {
                document.execCommand('copy') ? resolve() : reject(new Error('copy failed'));
            } catch (e) {
                reject(e);
            } finally {
                area.remove();
            }
        });
    };

    const exportNote = (text, isMd) => {
        const name = decodeURIComponent(notePath().split('/').pop() || 'note');
        const blob = new Blob([text], { type: 'text/plain;charset=utf-8' });
        const link = document.createElement('a');
        link.href = URL.createObjectURL(blob);
        link.download = name + (isMd ? '.md' : '.txt');
        document.body.appendChild(link);
        link.click();
        link.remove();
        URL.revokeObjectURL(link.href);
    };

    const showQr = () => {
        const modal = $('.qr-modal');
        const target = $('#qrcode');
        if (!modal || !target) return;
        target.innerHTML = '';
        if (window.QRCode) {
            new window.QRCode(target, { text: window.location.href, width: 200, height: 200 });
        } else {
            target.textContent = window.location.href;
        }
        modal.style.display = 'block';
    };

    // ------------------------------------------------------------------
    // Mobile view/edit toggle
    // ------------------------------------------------------------------

    const isMobile = () => /Android|webOS|iPhone|iPad|iPod|BlackBerry|IEMobile|Opera Mini/i.test(navigator.userAgent);

    const toggleViewMode = viewing => {
        const show = (node, visible, display) => {
            if (node) node.style.display = visible ? (display || 'block') : 'none';
        };
        show($('#contents'), !viewing);
        show($('.divide-line'), !viewing);
        show($('#preview-md'), true);
        show($('#btnEdit'), viewing, 'inline-flex');
        show($('#btnDone'), !viewing, 'inline-flex');
        show($('#btnCopyAll'), viewing, 'inline-flex');
        show($('.footer'), !viewing, 'flex');
    };

    // ------------------------------------------------------------------
    // Wiring
    // ------------------------------------------------------------------

    window.addEventListener('DOMContentLoaded', () => {
        const $textarea = $('#contents');
        const $loading = $('#loading');
        const $previewMd = $('#preview-md');
        const $modeSwitch = $('.opt-mode > input');
        const $shareSwitch = $('.opt-share > input');
        const $shareModal = $('.share-modal');
        const $shareInput = $('.share-modal input');
        const $topBar = $('#topBar');

        if (!$textarea) return;

        updateWordCount($textarea.value);

        if (isMobile() && $topBar && $previewMd) {
            $topBar.style.display = 'flex';
            const container = $('.note-container');
            if (container) container.style.top = '3.5rem';
            toggleViewMode(true);
        }

        const save = throttle(() => {
            renderMarkdown($previewMd, $textarea.value);
            if ($loading) $loading.style.display = 'inline-block';
            window.fetch(window.location.pathname, {
                method: 'POST',
                headers: { 'Content-Type': 'application/x-www-form-urlencoded' },
                body: new URLSearchParams({ t: $textarea.value }),
            })
                .then(res => res.json())
                .then(res => {
                    if (res.err !== 0) errHandle(res.msg);
                })
                .catch(err => errHandle(err))
                .finally(() => {
                    if ($loading) $loading.style.display = 'none';
                });
        }, SAVE_INTERVAL_MS);

        // Only editable pages show the toolbar.
        if ($('.opt')) {
            $textarea.addEventListener('input', () => {
                updateWordCount($textarea.value);
                save();
            });
        }

        const $pwBtn = $('.opt-pw');
        if ($pwBtn) {
            $pwBtn.onclick = () => {
                const passwd = window.prompt(t('new_pw'));
                if (passwd == null) return;
                postJSON(notePath() + '/pw', { passwd: passwd.trim() })
                    .then(res => {
                        if (res.err !== 0) return errHandle(res.msg);
                        toast(passwd.trim() ? t('pw_set') : t('pw_removed'), 'success');
                        window.setTimeout(() => window.location.reload(), 800);
                    })
                    .catch(err => errHandle(err));
            };
        }

        if ($modeSwitch) {
            $modeSwitch.onclick = e => {
                postJSON(notePath() + '/setting', { mode: e.target.checked ? 'md' : 'plain' })
                    .then(res => {
                        if (res.err !== 0) return errHandle(res.msg);
                        window.location.reload();
                    })
                    .catch(err => errHandle(err));
            };
        }

        if ($shareSwitch) {
            $shareSwitch.onclick = e => {
                const share = e.target.checked;
                postJSON(notePath() + '/setting', { share })
                    .then(res => {
                        if (res.err !== 0) return errHandle(res.msg);
                        if (share && $shareModal && $shareInput) {
                            $shareInput.value = window.location.origin + '/share/' + res.data;
                            $shareModal.style.display = 'block';
                        }
                    })
                    .catch(err => errHandle(err));
            };
        }

        document.querySelectorAll('.modal').forEach(modal => {
            const close = () => { modal.style.display = 'none'; };
            const closeBtn = modal.querySelector('.close-btn');
            const mask = modal.querySelector('.modal-mask');
            if (closeBtn) closeBtn.onclick = close;
            if (mask) mask.onclick = close;
        });

        const $copyBtn = $('.share-modal .opt-button');
        if ($copyBtn && $shareInput) {
            $copyBtn.onclick = () => {
                copyText($shareInput.value)
                    .then(() => {
                        toast(t('copied'), 'success');
                        window.setTimeout(() => { $shareModal.style.display = 'none'; }, 800);
                    })
                    .catch(err => errHandle(err));
            };
        }

        const isMd = () => ($modeSwitch ? $modeSwitch.checked : !!$previewMd);
        [$('.opt-qr'), $('#btnQrMobile')].forEach(btn => {
            if (btn) btn.onclick = showQr;
        });
        [$('.opt-export'), $('#btnExportMobile')].forEach(btn => {
            if (btn) btn.onclick = () => exportNote($textarea.value, isMd());
        });

        const $btnCopyAll = $('#btnCopyAll');
        if ($btnCopyAll) {
            $btnCopyAll.onclick = () => {
                copyText($textarea.value)
                    .then(() => toast(t('copied_all'), 'success'))
                    .catch(err => errHandle(err));
            };
        }
        const $btnEdit = $('#btnEdit');
        if ($btnEdit) $btnEdit.onclick = () => toggleViewMode(false);
        const $btnDone = $('#btnDone');
        if ($btnDone) $btnDone.onclick = () => toggleViewMode(true);
    });
})();
"##;
