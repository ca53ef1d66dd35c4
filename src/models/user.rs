use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

/// 登録済みユーザーを表すドメインモデル。
/// フィールド順がそのまま JSON のキー順になる (`id`, `created_at`, `updated_at`, `email`)。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub email: String,
}

/// ユーザー作成 API が受け取るペイロード。
/// `email` が欠けていても空文字としてデコードし、形式や重複のチェックは DB 側の制約に任せる。
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub email: String,
}

impl User {
    /// UUID とタイムスタンプを埋めた `User` を生成する。
    /// 作成直後は `created_at` と `updated_at` が同じ値になる。
    pub fn new(email: String) -> Self {
        let now = Utc::now();

        User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            email,
        }
    }
}
