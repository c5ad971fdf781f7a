// 連番ベース名を生成する
//
// 1枚目は「1 intro {ラベル}」、2枚目以降は「{番号} {ラベル}」。
// 拡張子は付けない（リネーム側が元の拡張子をそのまま繋げる）。
pub fn generate(count: usize, label: &str) -> Vec<String> {
    if count == 0 {
        return Vec::new();
    }

    let mut sequence = Vec::with_capacity(count);
    sequence.push(format!("1 intro {}", label));
    for i in 2..=count {
        sequence.push(format!("{} {}", i, label));
    }
    sequence
}
