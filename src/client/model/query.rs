use url::form_urlencoded;

/// Paging and search state of one list screen.
///
/// `page` is 1-based. Changing the search text or the page size always starts over at
/// page 1.
#[derive(Clone, Debug, PartialEq)]
pub struct PageQuery {
    page: u64,
    page_size: u64,
    search: String,
}

impl PageQuery {
    pub fn new(page_size: u64) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
        }
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// Offset of the first record on the current page.
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.page_size
    }

    /// Moves to `page`. Pages below 1 are ignored.
    ///
    /// # Returns
    /// - `true` - The page was accepted
    /// - `false` - `page` was below 1 and nothing changed
    pub fn set_page(&mut self, page: u64) -> bool {
        if page < 1 {
            return false;
        }
        self.page = page;
        true
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: u64) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// `skip=..&limit=..[&search=..]`; `search` is left out entirely when blank.
    pub fn to_query_string(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("skip", &self.skip().to_string())
            .append_pair("limit", &self.page_size.to_string());
        if !self.search.is_empty() {
            query.append_pair("search", &self.search);
        }
        query.finish()
    }
}

/// Pagination controls derived from the query. The backend reports no total, so
/// "next" is always offered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaginationView {
    pub page: u64,
    pub has_previous: bool,
}

impl From<&PageQuery> for PaginationView {
    fn from(query: &PageQuery) -> Self {
        Self {
            page: query.page(),
            has_previous: query.page() > 1,
        }
    }
}
