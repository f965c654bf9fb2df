//! 用户名列表解析

/// 将逗号分隔的用户名字符串解析为列表
///
/// 每个片段去除首尾空白，空片段被丢弃；顺序保持不变，此处不去重。
pub fn parse_users_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|user| !user.is_empty())
        .map(str::to_string)
        .collect()
}
