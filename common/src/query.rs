//! クエリ文字列とリクエストURLの組み立て

use url::form_urlencoded;

use crate::page::PageCursor;

/// クエリ文字列から検索語を取り出す
///
/// 先頭の `?` はあってもなくてもよい。空白のみの値は `None`。
pub fn search_term(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "search")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// 検索語からクエリ文字列を作る（ナビゲーション用）
pub fn search_query(term: &str) -> String {
    let encoded: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("search", term.trim())
        .finish();
    format!("?{}", encoded)
}

/// `GET {base}/shows/{page}?sort={sort}` のURL
pub fn shows_url(base: &str, page: PageCursor, sort: &str) -> String {
    let sort: String = form_urlencoded::byte_serialize(sort.as_bytes()).collect();
    format!("{}/shows/{}?sort={}", base.trim_end_matches('/'), page, sort)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_term() {
        assert_eq!(search_term("?search=wire"), Some("wire".to_string()));
        assert_eq!(search_term("search=wire"), Some("wire".to_string()));
        assert_eq!(search_term("?page=2&search=the+wire"), Some("the wire".to_string()));
        assert_eq!(search_term("?search=caf%C3%A9"), Some("café".to_string()));
    }

    #[test]
    fn test_search_term_missing_or_empty() {
        assert_eq!(search_term(""), None);
        assert_eq!(search_term("?"), None);
        assert_eq!(search_term("?search="), None);
        assert_eq!(search_term("?search=%20%20"), None);
        assert_eq!(search_term("?sort=title"), None);
    }

    #[test]
    fn test_search_query_round_trip() {
        let query = search_query("the wire");
        assert_eq!(query, "?search=the+wire");
        assert_eq!(search_term(&query), Some("the wire".to_string()));
    }

    #[test]
    fn test_shows_url() {
        let base = "https://catalog.example.com/api";
        assert_eq!(
            shows_url(base, PageCursor::first(), "popularity"),
            "https://catalog.example.com/api/shows/1?sort=popularity"
        );
        assert_eq!(
            shows_url("https://catalog.example.com/api/", PageCursor::All, "title"),
            "https://catalog.example.com/api/shows/all?sort=title"
        );
    }

    #[test]
    fn test_shows_url_encodes_sort() {
        let url = shows_url("http://localhost", PageCursor::first(), "a b&c");
        assert_eq!(url, "http://localhost/shows/1?sort=a+b%26c");
    }
}
