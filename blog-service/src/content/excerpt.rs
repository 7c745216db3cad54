const PARAGRAPH_BREAK: &str = "\n\n";

/// 提取正文第一段作为摘要，长度不超过`max_length`个字符
///
/// 段落以空行（两个连续换行）分隔。超出长度时优先在单词边界截断，
/// 找不到边界时按字符硬截断。`max_length`为0时返回空字符串。
pub fn extract_first_paragraph(text: &str, max_length: usize) -> String {
    if max_length == 0 {
        return String::new();
    }

    let paragraph = match text.find(PARAGRAPH_BREAK) {
        Some(index) => &text[..index],
        None => text,
    };

    // 按字符而不是字节计数
    let boundary = match paragraph.char_indices().nth(max_length) {
        Some((index, _)) => index,
        None => return paragraph.to_string(),
    };

    let (head, rest) = paragraph.split_at(boundary);
    if rest.starts_with(char::is_whitespace) && !head.trim_end().is_empty() {
        return head.trim_end().to_string();
    }

    head.rfind(char::is_whitespace)
        .map(|index| head[..index].trim_end())
        .filter(|word_cut| !word_cut.is_empty())
        .unwrap_or(head)
        .to_string()
}
