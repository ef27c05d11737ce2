// src/render/fonts.rs

use std::sync::OnceLock;

use plotters::style::{register_font, FontStyle};

/// 同梱フォント (DejaVu Sans, assets/fonts/LICENSE-DejaVu)
static SANS_SERIF: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");

/// plotters の `sans-serif` に同梱フォントを登録する
///
/// 登録はプロセスで一度だけ行い、以降は最初の結果を返す。
///
/// # 戻り値
/// - 登録に失敗した場合はその理由
pub fn ensure_registered() -> Result<(), String> {
    static REGISTERED: OnceLock<Result<(), String>> = OnceLock::new();
    REGISTERED
        .get_or_init(|| {
            register_font("sans-serif", FontStyle::Normal, SANS_SERIF)
                .map_err(|_| "同梱フォントを読み込めません".to_string())
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_is_repeatable() {
        assert!(ensure_registered().is_ok());
        assert!(ensure_registered().is_ok());
    }

    #[test]
    fn test_bundled_font_is_truetype() {
        assert_eq!(&SANS_SERIF[..4], &[0x00, 0x01, 0x00, 0x00]);
    }
}
