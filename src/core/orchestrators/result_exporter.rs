use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

use crate::core::interfaces::adapters::DownloadTarget;
use crate::core::models::ResultList;

pub fn serialize_results(results: &ResultList) -> Result<Vec<u8>> {
    serde_json::to_vec(results).context("Unable to serialize results")
}

pub struct ResultExporter {
    download_target: Arc<dyn DownloadTarget>,
    file_name: String,
}

impl ResultExporter {
    pub fn new(download_target: Arc<dyn DownloadTarget>, file_name: String) -> Self {
        Self {
            download_target,
            file_name,
        }
    }

    pub fn save_results(&self, results: &ResultList) -> Result<PathBuf> {
        log::info!("[EXPORT] Saving {} results as {}", results.len(), self.file_name);
        if results.is_empty() {
            log::warn!("[EXPORT] No results held, exporting an empty list");
        }

        let bytes = serialize_results(results)?;
        let reference = self.download_target.create_object_reference(&bytes)?;
        let delivered = self.download_target.deliver(&reference, &self.file_name);
        self.download_target.release(reference);

        delivered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interfaces::adapters::ObjectReference;
    use crate::core::models::ResultItem;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum DownloadEvent {
        Created(String, Vec<u8>),
        Delivered(String, String),
        Released(String),
    }

    struct MockDownloadTarget {
        events: Arc<Mutex<Vec<DownloadEvent>>>,
        fail_delivery: bool,
        next_id: Mutex<u32>,
    }

    impl MockDownloadTarget {
        fn new() -> Self {
            Self {
                events: Arc::new(Mutex::new(Vec::new())),
                fail_delivery: false,
                next_id: Mutex::new(0),
            }
        }

        fn failing_delivery() -> Self {
            Self {
                fail_delivery: true,
                ..Self::new()
            }
        }

        fn get_events(&self) -> Vec<DownloadEvent> {
            self.events.lock().unwrap().clone()
        }

        fn count_deliveries(&self) -> usize {
            self.get_events()
                .iter()
                .filter(|event| matches!(event, DownloadEvent::Delivered(_, _)))
                .count()
        }
    }

    impl DownloadTarget for MockDownloadTarget {
        fn create_object_reference(&self, bytes: &[u8]) -> Result<ObjectReference> {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            let id = format!("blob:test/{}", next_id);
            self.events
                .lock()
                .unwrap()
                .push(DownloadEvent::Created(id.clone(), bytes.to_vec()));
            Ok(ObjectReference {
                id,
                location: PathBuf::from("memory"),
            })
        }

        fn deliver(&self, reference: &ObjectReference, file_name: &str) -> Result<PathBuf> {
            self.events.lock().unwrap().push(DownloadEvent::Delivered(
                reference.id.clone(),
                file_name.to_string(),
            ));
            if self.fail_delivery {
                anyhow::bail!("download blocked");
            }
            Ok(PathBuf::from("/downloads").join(file_name))
        }

        fn release(&self, reference: ObjectReference) {
            self.events
                .lock()
                .unwrap()
                .push(DownloadEvent::Released(reference.id));
        }
    }

    fn create_exporter(target: Arc<MockDownloadTarget>) -> ResultExporter {
        ResultExporter::new(target, "results.json".to_string())
    }

    #[test]
    fn test_save_results_creates_delivers_once_and_releases() {
        let target = Arc::new(MockDownloadTarget::new());
        let exporter = create_exporter(Arc::clone(&target));
        let results = ResultList::from(vec![ResultItem::new("X", "http://x", "X snippet")]);

        let saved_path = exporter.save_results(&results).unwrap();

        assert_eq!(saved_path, PathBuf::from("/downloads/results.json"));
        assert_eq!(
            target.get_events(),
            vec![
                DownloadEvent::Created(
                    "blob:test/1".to_string(),
                    br#"[{"title":"X","link":"http://x","snippet":"X snippet"}]"#.to_vec()
                ),
                DownloadEvent::Delivered("blob:test/1".to_string(), "results.json".to_string()),
                DownloadEvent::Released("blob:test/1".to_string()),
            ]
        );
        assert_eq!(target.count_deliveries(), 1);
    }

    #[test]
    fn test_save_empty_results_still_exports_empty_array() {
        let target = Arc::new(MockDownloadTarget::new());
        let exporter = create_exporter(Arc::clone(&target));

        exporter.save_results(&ResultList::empty()).unwrap();

        assert_eq!(
            target.get_events()[0],
            DownloadEvent::Created("blob:test/1".to_string(), b"[]".to_vec())
        );
    }

    #[test]
    fn test_saving_twice_triggers_two_independent_downloads_with_same_content() {
        let target = Arc::new(MockDownloadTarget::new());
        let exporter = create_exporter(Arc::clone(&target));
        let results = ResultList::from(vec![
            ResultItem::new("Foo", "http://foo", "Foo snippet"),
            ResultItem::new("Bar", "http://bar", "Bar snippet"),
        ]);

        exporter.save_results(&results).unwrap();
        exporter.save_results(&results).unwrap();

        let created: Vec<(String, Vec<u8>)> = target
            .get_events()
            .into_iter()
            .filter_map(|event| match event {
                DownloadEvent::Created(id, bytes) => Some((id, bytes)),
                _ => None,
            })
            .collect();

        assert_eq!(created.len(), 2);
        assert_ne!(created[0].0, created[1].0);
        assert_eq!(created[0].1, created[1].1);
        assert_eq!(target.count_deliveries(), 2);
    }

    #[test]
    fn test_failed_delivery_still_releases_reference() {
        let target = Arc::new(MockDownloadTarget::failing_delivery());
        let exporter = create_exporter(Arc::clone(&target));

        let result = exporter.save_results(&ResultList::empty());

        assert!(result.is_err());
        assert_eq!(
            target.get_events().last(),
            Some(&DownloadEvent::Released("blob:test/1".to_string()))
        );
    }

    #[test]
    fn test_serialized_results_parse_back_to_same_list() {
        let results = ResultList::from(vec![
            ResultItem::new("Foo", "http://foo", "Foo snippet"),
            ResultItem::new("Bar", "http://bar", "Bar snippet"),
        ]);

        let bytes = serialize_results(&results).unwrap();
        let parsed: ResultList = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(parsed, results);
    }
}
