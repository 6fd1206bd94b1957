//! Static UI strings, keyed by language.

use axum::http::{header::ACCEPT_LANGUAGE, HeaderMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Zh,
}

impl Lang {
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Zh => "zh",
        }
    }

    /// Primary subtag of the first `Accept-Language` entry, falling back to English.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(Self::from_accept_language)
            .unwrap_or_default()
    }

    pub fn from_accept_language(value: &str) -> Self {
        let first = value.split(',').next().unwrap_or("");
        let primary = first
            .split(';')
            .next()
            .unwrap_or("")
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match primary.as_str() {
            "zh" => Lang::Zh,
            _ => Lang::En,
        }
    }

    pub fn strings(&self) -> &'static Strings {
        match self {
            Lang::En => &EN,
            Lang::Zh => &ZH,
        }
    }
}

/// Server-rendered page text.
pub struct Strings {
    pub set_pw: &'static str,
    pub change_pw: &'static str,
    pub share: &'static str,
    pub last_modified: &'static str,
    pub copy: &'static str,
    pub copy_all: &'static str,
    pub edit: &'static str,
    pub done: &'static str,
    pub qr_code: &'static str,
    pub scan_to_view: &'static str,
    pub export_note: &'static str,
    pub chars: &'static str,
    pub words: &'static str,
    pub empty_placeholder: &'static str,
    pub tip_encrypt: &'static str,
    pub tip_404: &'static str,
    pub tip_app_auth: &'static str,
    pub client: ClientStrings,
}

/// Text used by the browser script, serialized into the page.
#[derive(serde::Serialize)]
pub struct ClientStrings {
    pub err: &'static str,
    pub enter_pw: &'static str,
    pub enter_app_pw: &'static str,
    pub pw_empty: &'static str,
    pub new_pw: &'static str,
    pub pw_set: &'static str,
    pub pw_removed: &'static str,
    pub copied: &'static str,
    pub copied_all: &'static str,
    pub too_many_attempts: &'static str,
}

pub static EN: Strings = Strings {
    set_pw: "Set Password",
    change_pw: "Change Password",
    share: "Share",
    last_modified: "Last Modified",
    copy: "Copy",
    copy_all: "Copy All",
    edit: "Edit",
    done: "Done",
    qr_code: "QR Code",
    scan_to_view: "Scan to view on mobile",
    export_note: "Export",
    chars: "Chars",
    words: "Words",
    empty_placeholder: "There are many like it, but this one is mine...",
    tip_encrypt: "This Note has been encrypted, please enter password!",
    tip_404: "404, Nothing here",
    tip_app_auth: "This app is password protected!",
    client: ClientStrings {
        err: "Error",
        enter_pw: "Please enter password.",
        enter_app_pw: "Please enter app password",
        pw_empty: "Password is empty!",
        new_pw: "Enter a new password(Keeping it empty will remove the current password)",
        pw_set: "Password set successfully.",
        pw_removed: "Password removed successfully.",
        copied: "Copied!",
        copied_all: "Copied all content!",
        too_many_attempts: "Too many attempts, reload the page to try again.",
    },
};

pub static ZH: Strings = Strings {
    set_pw: "设置密码",
    change_pw: "修改密码",
    share: "分享",
    last_modified: "上次保存",
    copy: "复制",
    copy_all: "复制全文",
    edit: "编辑",
    done: "完成",
    qr_code: "二维码",
    scan_to_view: "扫码在手机查看",
    export_note: "导出",
    chars: "字符",
    words: "字数",
    empty_placeholder: "看来你是第一个到这儿的人，写点什么吧...",
    tip_encrypt: "这是一篇加密笔记，你必须先输入密码",
    tip_404: "404，你要找的东西并不存在",
    tip_app_auth: "此应用已设置访问密码！",
    client: ClientStrings {
        err: "出错了",
        enter_pw: "请输入密码",
        enter_app_pw: "请输入应用密码",
        pw_empty: "密码不能为空！",
        new_pw: "输入新密码（留空可清除当前密码）",
        pw_set: "密码设置成功！",
        pw_removed: "密码清除成功！",
        copied: "已复制",
        copied_all: "已复制全文！",
        too_many_attempts: "尝试次数过多，请刷新页面后重试",
    },
};
