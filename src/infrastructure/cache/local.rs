use std::sync::Arc;

use moka::future::Cache;

use crate::{config::CacheConfig, infrastructure::db::entities::design};

/// In-process read-through cache for fetched designs, keyed by code.
///
/// Designs are immutable once stored, so entries are only evicted for size or
/// age, never invalidated. Capacity is a byte budget: each entry weighs roughly
/// what its strings occupy.
pub struct LocalCache {
    designs_cache: Cache<String, Arc<design::Model>>,
}

impl LocalCache {
    pub fn new(cache_config: &CacheConfig) -> Self {
        Self {
            designs_cache: Cache::builder()
                .weigher(|code: &String, design: &Arc<design::Model>| design_weight(code, design))
                .max_capacity(cache_config.designs_max_bytes)
                .time_to_live(cache_config.designs_ttl)
                .build(),
        }
    }

    pub async fn get_design(&self, code: &str) -> Option<Arc<design::Model>> {
        self.designs_cache.get(code).await
    }

    pub async fn set_design(&self, design: design::Model) -> Arc<design::Model> {
        let design = Arc::new(design);
        self.designs_cache
            .insert(design.code.clone(), design.clone())
            .await;
        design
    }
}

fn design_weight(code: &str, design: &design::Model) -> u32 {
    let bytes = code.len()
        + design.code.len()
        + design.product_id.len()
        + design.svg.len()
        + design.state_json.as_ref().map_or(0, String::len);

    u32::try_from(bytes).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::Utc;

    use super::*;

    const BUDGET: u64 = 4 * 1024;

    fn cache() -> LocalCache {
        LocalCache::new(&CacheConfig {
            designs_max_bytes: BUDGET,
            designs_ttl: Duration::from_secs(60),
        })
    }

    fn design_with_svg(code: &str, svg_bytes: usize) -> design::Model {
        design::Model {
            id: 1,
            code: code.into(),
            product_id: "mug".into(),
            svg: "x".repeat(svg_bytes),
            state_json: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn weight_counts_every_stored_string() {
        let mut design = design_with_svg("AB7XQ9", 100);
        design.state_json = Some(r#"{"zoom":2}"#.into());

        assert_eq!(design_weight("AB7XQ9", &design), 6 + 6 + 3 + 100 + 10);
    }

    #[tokio::test]
    async fn design_larger_than_budget_is_not_kept() {
        let cache = cache();

        cache.set_design(design_with_svg("HUGE22", 2 * BUDGET as usize)).await;
        cache.set_design(design_with_svg("SMALL2", 64)).await;
        cache.designs_cache.run_pending_tasks().await;

        assert!(cache.get_design("HUGE22").await.is_none());
        assert!(cache.get_design("SMALL2").await.is_some());
        assert!(cache.designs_cache.weighted_size() <= BUDGET);
    }

    #[tokio::test]
    async fn resident_bytes_stay_within_budget() {
        let cache = cache();

        for code in ["AAAAA2", "BBBBB3", "CCCCC4", "DDDDD5", "EEEEE6", "FFFFF7"] {
            cache.set_design(design_with_svg(code, 1024)).await;
        }
        cache.designs_cache.run_pending_tasks().await;

        assert!(cache.designs_cache.weighted_size() <= BUDGET);
        assert!(cache.designs_cache.entry_count() < 6);
    }
}
