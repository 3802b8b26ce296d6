//! ページカーソル

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use crate::error::Error;

/// ページ位置
///
/// `All` は「検索に一致する全件を1回で取得する」番兵。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageCursor {
    Number(NonZeroU32),
    All,
}

impl PageCursor {
    pub fn first() -> Self {
        PageCursor::Number(NonZeroU32::MIN)
    }

    /// 次のページ（`All` には次がない）
    pub fn next(&self) -> Option<Self> {
        match self {
            PageCursor::Number(n) => n.checked_add(1).map(PageCursor::Number),
            PageCursor::All => None,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, PageCursor::All)
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            PageCursor::Number(n) => Some(n.get()),
            PageCursor::All => None,
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}

impl fmt::Display for PageCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageCursor::Number(n) => write!(f, "{}", n),
            PageCursor::All => write!(f, "all"),
        }
    }
}

impl FromStr for PageCursor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Ok(PageCursor::All);
        }
        s.parse::<NonZeroU32>()
            .map(PageCursor::Number)
            .map_err(|_| Error::Config(format!("Invalid page: {}", s)))
    }
}
