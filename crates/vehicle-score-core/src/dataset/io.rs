//! 入力ソースと CSV リーダの構築
//!
//! gzip は拡張子ではなく先頭 2 バイト（`1f 8b`）で判定する。
//! 標準入力や拡張子の無いファイルでも同じように展開される。

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use csv::{Reader, ReaderBuilder};
use flate2::bufread::MultiGzDecoder;

const READER_BUF_CAP: usize = 128 * 1024; // 128 KiB
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// 読み込み元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// `-` は標準入力、それ以外はファイルパス
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let p = path.as_ref();
        if p.as_os_str() == "-" {
            InputSource::Stdin
        } else {
            InputSource::File(p.to_path_buf())
        }
    }

    /// 開いてバイト列のリーダを返す。gzip なら展開済みのストリーム。
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            InputSource::Stdin => {
                decode_if_gzip(BufReader::with_capacity(READER_BUF_CAP, io::stdin()))
            }
            InputSource::File(path) => {
                let f = File::open(path)?;
                decode_if_gzip(BufReader::with_capacity(READER_BUF_CAP, f))
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// 先頭が gzip マジックなら展開リーダで包む。連結された gzip メンバーも続けて読む。
///
/// 判定は最初の `fill_buf` で見えたバイトだけで行う。
fn decode_if_gzip<'a, R: BufRead + 'a>(mut reader: R) -> io::Result<Box<dyn Read + 'a>> {
    let head = reader.fill_buf()?;
    if head.starts_with(&GZIP_MAGIC) {
        let dec = MultiGzDecoder::new(reader);
        return Ok(Box::new(BufReader::with_capacity(READER_BUF_CAP, dec)));
    }
    Ok(Box::new(reader))
}

/// ヘッダ付き・行長可変の CSV リーダ
///
/// フィールドの空白はここでは落とさない（先頭の空白だけを列アクセス時に除く）。
pub fn delimited_reader<R: Read>(source: R) -> Reader<R> {
    ReaderBuilder::new().has_headers(true).flexible(true).from_reader(source)
}
