//! 接口响应数据结构

use serde::{Deserialize, Deserializer};

/// 接口成功时 meta.status 的取值
pub const SUCCESS_STATUS: &str = "Success";

/// 响应中的 meta 对象
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiMeta {
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiMeta {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(SUCCESS_STATUS)
    }
}

/// 拉黑接口响应
#[derive(Debug, Clone, Deserialize)]
pub struct BlockResponse {
    #[serde(default)]
    pub meta: Option<ApiMeta>,
}

impl BlockResponse {
    pub fn is_success(&self) -> bool {
        self.meta.as_ref().is_some_and(ApiMeta::is_success)
    }

    pub fn status(&self) -> Option<String> {
        self.meta.as_ref().and_then(|meta| meta.status.clone())
    }
}

/// 黑名单接口响应
#[derive(Debug, Clone, Deserialize)]
pub struct BlockListResponse {
    #[serde(default)]
    pub meta: Option<ApiMeta>,
    #[serde(default)]
    pub data: Option<BlockListData>,
}

impl BlockListResponse {
    pub fn is_success(&self) -> bool {
        self.meta.as_ref().is_some_and(ApiMeta::is_success)
    }

    pub fn status(&self) -> Option<String> {
        self.meta.as_ref().and_then(|meta| meta.status.clone())
    }
}

/// 黑名单数据
#[derive(Debug, Clone, Deserialize)]
pub struct BlockListData {
    #[serde(default)]
    pub users: Vec<BlockedUser>,
    /// 缺省视为已到末尾
    #[serde(
        rename = "didEndOfList",
        default = "default_end_of_list",
        deserialize_with = "deserialize_flag"
    )]
    pub did_end_of_list: bool,
}

/// 黑名单中的一个账号
#[derive(Debug, Clone, Deserialize)]
pub struct BlockedUser {
    pub username: String,
}

/// 黑名单的一页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockListPage {
    pub usernames: Vec<String>,
    pub end_of_list: bool,
    pub next_offset: usize,
}

fn default_end_of_list() -> bool {
    true
}

// didEndOfList 可能是 0/1、true/false 或 "0"/"1"
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean, an integer or a numeric string")
        }

        fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value != 0)
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(value != 0)
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            match value.trim() {
                "" | "0" | "false" => Ok(false),
                _ => Ok(true),
            }
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(true)
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_data(json: &str) -> BlockListData {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_end_of_list_flag_variants() {
        assert!(!parse_data(r#"{"users":[],"didEndOfList":0}"#).did_end_of_list);
        assert!(parse_data(r#"{"users":[],"didEndOfList":1}"#).did_end_of_list);
        assert!(!parse_data(r#"{"users":[],"didEndOfList":false}"#).did_end_of_list);
        assert!(parse_data(r#"{"users":[],"didEndOfList":"1"}"#).did_end_of_list);
        assert!(parse_data(r#"{"users":[]}"#).did_end_of_list);
    }

    #[test]
    fn test_block_response_status() {
        let ok: BlockResponse = serde_json::from_str(r#"{"meta":{"status":"Success"}}"#).unwrap();
        assert!(ok.is_success());

        let failed: BlockResponse =
            serde_json::from_str(r#"{"meta":{"status":"Failure","errorCode":401}}"#).unwrap();
        assert!(!failed.is_success());
        assert_eq!(failed.status().as_deref(), Some("Failure"));

        let empty: BlockResponse = serde_json::from_str("{}").unwrap();
        assert!(!empty.is_success());
        assert_eq!(empty.status(), None);
    }

    #[test]
    fn test_block_list_users_ignore_extra_fields() {
        let response: BlockListResponse = serde_json::from_str(
            r#"{"meta":{"status":"Success"},"data":{"users":[{"username":"sadfrong","accountId":"42"}],"didEndOfList":1}}"#,
        )
        .unwrap();
        assert!(response.is_success());
        let data = response.data.unwrap();
        assert_eq!(data.users[0].username, "sadfrong");
    }
}
