use chrono::Datelike;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// 左侧补零到指定宽度
///
/// 超出宽度的数值原样输出，不截断。
pub fn zero_pad(width: usize, value: u32) -> String {
    format!("{value:0width$}")
}

/// 转换为 `YYYY-MM-DD` 格式的日期字符串
///
/// 直接使用存储的日期分量，不做时区换算。
pub fn to_date_only(value: &impl Datelike) -> String {
    format!(
        "{:04}-{}-{}",
        value.year(),
        zero_pad(2, value.month()),
        zero_pad(2, value.day())
    )
}

/// 将标题转换为 slug
///
/// 处理步骤：
///
/// - NFKD 分解后去掉组合附加符号（`é` → `e`）
/// - 转为小写
/// - 按空白和 `-` 切分，每段只保留 `a-z`
/// - 丢弃空段，再用 `-` 连接
///
/// 结果只包含 `[a-z-]`，首尾不会出现 `-`，并且重复调用结果不变。
pub fn to_slug(value: &str) -> String {
    let folded = value
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase();

    folded
        .split(|c: char| c.is_whitespace() || c == '-')
        .map(|word| {
            word.chars()
                .filter(|c| c.is_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
