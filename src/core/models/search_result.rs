use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultItem {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

impl ResultItem {
    #[cfg(test)]
    pub fn new(title: impl Into<String>, link: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            snippet: snippet.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultList(Vec<ResultItem>);

impl ResultList {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn items(&self) -> &[ResultItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ResultItem>> for ResultList {
    fn from(items: Vec<ResultItem>) -> Self {
        Self(items)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub items: Vec<ResultItem>,
}

impl SearchEnvelope {
    pub fn into_result_list(self) -> ResultList {
        ResultList::from(self.items)
    }
}
