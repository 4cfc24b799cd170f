use crate::models::file_status::FileStatus;

/// Render one metadata record as the six-line report.
///
/// Field order and labels are fixed; every value prints in decimal except
/// `checksum`, which prints as bare lowercase hex.
pub fn generate(st: &FileStatus) -> String {
    let mut out = String::new();
    out.push_str(&format!("type: {}\n", st.kind.code()));
    out.push_str(&format!("dev: {}\n", st.dev));
    out.push_str(&format!("ino: {}\n", st.ino));
    out.push_str(&format!("nlink: {}\n", st.nlink));
    out.push_str(&format!("size: {}\n", st.size));
    out.push_str(&format!("checksum: {:x}\n", st.checksum));
    out
}
