use std::path::{Path, PathBuf};

/// Write a labelled count matrix over `[free, offer, meeting, report]` to
/// `dir/name`. Spam rows lean on the first two terms, ham on the last two.
pub fn write_corpus(dir: &Path, name: &str, n_per_class: usize, offset: usize) -> PathBuf {
    let mut csv = String::from("free,offer,meeting,report,label\n");
    for i in 0..n_per_class {
        let k = i + offset;
        csv.push_str(&format!(
            "{},{},{},0,1\n",
            2 + k % 3,
            1 + k % 2,
            usize::from(k % 4 == 0)
        ));
        csv.push_str(&format!(
            "0,{},{},{},0\n",
            usize::from(k % 5 == 0),
            1 + k % 2,
            2 + k % 3
        ));
    }
    let path = dir.join(name);
    std::fs::write(&path, csv).unwrap();
    path
}
