#![warn(clippy::uninlined_format_args)]

#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const MEMBER: &str = "メンバー";
    pub const STATUS: &str = "状態";
    pub const FROM: &str = "支払人";
    pub const TO: &str = "受取人";
    pub const AMOUNT: &str = "金額";
    pub const PAID_BY: &str = "支払者";
    pub const IS_OWED: &str = "受け取り";
    pub const OWES: &str = "支払い";
    pub const SETTLED_UP: &str = "清算済み";
    pub const EVERYONE_SETTLED: &str = "全員清算済みです!";
    pub const NO_EXPENSES: &str = "支出はまだありません";
    pub const UNKNOWN: &str = "不明";
    pub const MISSING_MEMBERS_DECLARATION: &str =
        "スクリプトの先頭に `MEMBERS := ...` の宣言が見つかりません。";
    pub const EMPTY_NAME: &str = "名前を入力してください";
    pub const EMPTY_DESCRIPTION: &str = "支出の説明を入力してください";
    pub const NO_PARTICIPANTS: &str = "支出を分ける相手がいません";
}

#[cfg(not(feature = "ja"))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const STATUS: &str = "Status";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const PAID_BY: &str = "Paid by";
    pub const IS_OWED: &str = "Is owed";
    pub const OWES: &str = "Owes";
    pub const SETTLED_UP: &str = "Settled up";
    pub const EVERYONE_SETTLED: &str = "Everyone is settled up!";
    pub const NO_EXPENSES: &str = "No expenses yet";
    pub const UNKNOWN: &str = "Unknown";
    pub const MISSING_MEMBERS_DECLARATION: &str =
        "Could not find the `MEMBERS := ...` declaration at the top of the script.";
    pub const EMPTY_NAME: &str = "Please enter a name";
    pub const EMPTY_DESCRIPTION: &str = "Please enter a description";
    pub const NO_PARTICIPANTS: &str = "Select at least one person to split with";
}

pub use strings::*;

#[cfg(feature = "ja")]
mod messages {
    use std::fmt::Display;

    pub fn should_pay(from: impl Display, to: impl Display) -> String {
        format!("{from} は {to} に支払ってください")
    }

    pub fn duplicate_participant(id: impl Display) -> String {
        format!("メンバー '{id}' は既に存在します")
    }

    pub fn duplicate_email(email: impl Display) -> String {
        format!("メールアドレス '{email}' は既に使われています")
    }

    pub fn cannot_remove_owner(id: impl Display) -> String {
        format!("'{id}' は台帳の所有者なので削除できません")
    }

    pub fn unknown_participant(id: impl Display) -> String {
        format!("未定義のメンバー '{id}' です")
    }

    pub fn non_positive_amount(amount: impl Display) -> String {
        format!("金額は正の値にしてください ({amount})")
    }

    pub fn amount_too_large(amount: impl Display, limit: impl Display) -> String {
        format!("金額 {amount} は上限 {limit} を超えています")
    }

    pub fn unknown_payer(id: impl Display) -> String {
        format!("支払者 '{id}' はメンバーではありません")
    }

    pub fn unknown_expense(id: impl Display) -> String {
        format!("支出 #{id} は存在しません")
    }

    pub fn negative_share(id: impl Display, share: impl Display) -> String {
        format!("'{id}' の負担額が負の値です ({share})")
    }

    pub fn split_mismatch(total: impl Display, amount: impl Display) -> String {
        format!("負担額の合計 {total} が金額 {amount} と一致しません")
    }

    pub fn invalid_amount(literal: impl Display) -> String {
        format!("金額 '{literal}' を解釈できません")
    }

    pub fn invalid_date(literal: impl Display) -> String {
        format!("日付 '{literal}' を解釈できません (YYYY-MM-DD)")
    }

    pub fn at_line(line: usize, message: impl Display) -> String {
        format!("{message} (行 {line})")
    }

    pub fn syntax_error(line: usize, detail: impl Display) -> String {
        format!("構文エラー (行 {line}): {detail}")
    }
}

#[cfg(not(feature = "ja"))]
mod messages {
    use std::fmt::Display;

    pub fn should_pay(from: impl Display, to: impl Display) -> String {
        format!("{from} should pay {to}")
    }

    pub fn duplicate_participant(id: impl Display) -> String {
        format!("Participant '{id}' already exists")
    }

    pub fn duplicate_email(email: impl Display) -> String {
        format!("A participant with e-mail '{email}' already exists")
    }

    pub fn cannot_remove_owner(id: impl Display) -> String {
        format!("'{id}' owns the ledger and cannot be removed")
    }

    pub fn unknown_participant(id: impl Display) -> String {
        format!("Unknown participant '{id}'")
    }

    pub fn non_positive_amount(amount: impl Display) -> String {
        format!("Amount must be greater than zero (got {amount})")
    }

    pub fn amount_too_large(amount: impl Display, limit: impl Display) -> String {
        format!("Amount {amount} exceeds the limit of {limit}")
    }

    pub fn unknown_payer(id: impl Display) -> String {
        format!("Payer '{id}' is not a participant")
    }

    pub fn unknown_expense(id: impl Display) -> String {
        format!("Expense #{id} does not exist")
    }

    pub fn negative_share(id: impl Display, share: impl Display) -> String {
        format!("Share for '{id}' is negative ({share})")
    }

    pub fn split_mismatch(total: impl Display, amount: impl Display) -> String {
        format!("Split amounts must sum to the total expense amount ({total} != {amount})")
    }

    pub fn invalid_amount(literal: impl Display) -> String {
        format!("Could not read amount '{literal}'")
    }

    pub fn invalid_date(literal: impl Display) -> String {
        format!("Could not read date '{literal}' (expected YYYY-MM-DD)")
    }

    pub fn at_line(line: usize, message: impl Display) -> String {
        format!("{message} (line {line})")
    }

    pub fn syntax_error(line: usize, detail: impl Display) -> String {
        format!("Syntax error at line {line}: {detail}")
    }
}

pub use messages::*;
