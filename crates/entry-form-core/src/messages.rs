//! User-facing error messages

pub const LEADING_SPACE: &str = "先頭に不要なスペースがあります";

pub const NAME_REQUIRED: &str = "名前が入力されていません";
pub const NAME_CHARSET: &str = "ひらがな、カタカナ、漢字のみで入力してください";
pub const NAME_TOO_LONG: &str = "名前は20文字以内で入力してください";

pub const KANA_REQUIRED: &str = "ふりがなが入力されていません";
pub const KANA_CHARSET: &str = "ひらがなで入力してください";
pub const KANA_TOO_LONG: &str = "ふりがなは20文字以内で入力してください";

pub const BIRTH_DATE_REQUIRED: &str = "生年月日が入力されていません";
pub const BIRTH_DATE_FORMAT: &str = "生年月日はYYYY-MM-DDの形式で入力してください";
pub const BIRTH_DATE_INVALID: &str = "生年月日が正しくありません";

pub const POSTAL_CODE_REQUIRED: &str = "郵便番号が入力されていません";
pub const POSTAL_CODE_HYPHEN: &str = "郵便番号にはハイフン（-）を入力してください";
pub const POSTAL_CODE_FORMAT: &str = "郵便番号が正しくありません(半角数字で入力してください)";

pub const ADDRESS_REQUIRED: &str = "住所(都道府県もしくは市区町村・番地)が入力されていません";
pub const PREFECTURE_CHARSET: &str = "都道府県は漢字で入力してください";
pub const PREFECTURE_TOO_LONG: &str = "都道府県は10文字以内で入力してください";
pub const CITY_TOWN_CHARSET: &str = "不正な文字が含まれています(数字や記号は半角で入力してください)";
pub const BUILDING_CHARSET: &str =
    "不正な文字が含まれています(数字・アルファベット・記号は半角で入力してください)";
pub const CITY_TOWN_TOO_LONG: &str = "市区町村・番地もしくは建物名は50文字以内で入力してください";
pub const ADDRESS_MISMATCH: &str = "郵便番号と住所の組み合わせが正しくありません";

pub const TEL_REQUIRED: &str = "電話番号が入力されていません";
pub const TEL_HYPHEN: &str = "電話番号にはハイフン（-）を入力してください";
pub const TEL_FORMAT: &str = "電話番号は12~13桁の半角数字で正しく入力してください";

pub const EMAIL_REQUIRED: &str = "メールアドレスが入力されていません";
pub const EMAIL_INVALID: &str = "有効なメールアドレスを入力してください(半角で入力してください)";
pub const EMAIL_TAKEN: &str = "このメールアドレスは既に登録されています";

// The live address check reports which of the three inputs is at fault
pub const LIVE_PREFECTURE_REQUIRED: &str = "都道府県が入力されていません";
pub const LIVE_PREFECTURE_LEADING_SPACE: &str = "都道府県の先頭に不要なスペースがあります";
pub const LIVE_CITY_TOWN_REQUIRED: &str = "市区町村・番地が入力されていません";
pub const LIVE_CITY_TOWN_LEADING_SPACE: &str = "市区町村・番地の先頭に不要なスペースがあります";
pub const LIVE_CITY_TOWN_CHARSET: &str =
    "市区町村・番地に不正な文字が含まれています(数字や記号は半角で入力してください)";
pub const LIVE_CITY_TOWN_TOO_LONG: &str = "市区町村・番地は50文字以内で入力してください";
pub const LIVE_BUILDING_LEADING_SPACE: &str = "建物名の先頭に不要なスペースがあります";
pub const LIVE_BUILDING_CHARSET: &str =
    "建物名に不正な文字が含まれています(数字・アルファベット・記号は半角で入力してください)";
pub const LIVE_BUILDING_TOO_LONG: &str = "建物名は50文字以内で入力してください";

/// Display label of an identity document slot
pub fn document_label(slot: u8) -> &'static str {
    match slot {
        1 => "本人確認書類(表)",
        _ => "本人確認書類(裏)",
    }
}

pub fn document_too_large(label: &str) -> String {
    format!("{label}のファイルサイズが大きすぎます")
}

pub fn document_upload_failed(label: &str) -> String {
    format!("{label}のアップロードに失敗しました")
}

pub fn document_wrong_type(label: &str) -> String {
    format!("{label}はPNGまたはJPEG形式の画像を選択してください")
}
