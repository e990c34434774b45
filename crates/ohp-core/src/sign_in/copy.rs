//! Fixed Vietnamese copy of the sign-in screen.

use crate::notification::Alert;

pub const LABEL: &str = "Nhập số điện thoại";
pub const BODY: &str =
    "Dùng số điện thoại để đăng nhập hoặc đăng ký tài khoản tại OneHousing Pro";
pub const PLACEHOLDER: &str = "Nhập số điện thoại của bạn";
pub const CONTINUE_BUTTON: &str = "Tiếp tục";

pub const ALERT_TITLE: &str = "Lỗi";
pub const ALERT_OK: &str = "OK";
pub const INVALID_PHONE_MESSAGE: &str = "Số điện thoại không hợp lệ. Vui lòng kiểm tra lại.";
pub const SAVE_FAILED_MESSAGE: &str = "Không thể lưu số điện thoại. Vui lòng thử lại.";

/// Alert shown when the submitted number has the wrong shape.
pub fn invalid_phone_alert() -> Alert {
    Alert::new(ALERT_TITLE, INVALID_PHONE_MESSAGE).with_button(ALERT_OK)
}

/// Alert shown when the number could not be written to storage.
pub fn save_failed_alert() -> Alert {
    Alert::new(ALERT_TITLE, SAVE_FAILED_MESSAGE)
}
