#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::LoaderConfig;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use url::Url;

    #[derive(Clone, Copy)]
    enum Script {
        Succeed,
        Fail,
        Hang,
        FailThenSucceed(u32),
    }

    struct ScriptedFetcher {
        default: Script,
        scripts: HashMap<String, Script>,
        calls: Mutex<Vec<String>>,
        counts: Mutex<HashMap<String, u32>>,
    }

    impl ScriptedFetcher {
        fn new(default: Script) -> Self {
            Self {
                default,
                scripts: HashMap::new(),
                calls: Mutex::new(Vec::new()),
                counts: Mutex::new(HashMap::new()),
            }
        }

        fn script(mut self, url: &str, script: Script) -> Self {
            self.scripts.insert(url.to_string(), script);
            self
        }

        fn count(&self, url: &str) -> u32 {
            self.counts.lock().unwrap().get(url).copied().unwrap_or(0)
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ImageFetcher for ScriptedFetcher {
        async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
            let key = url.to_string();
            self.calls.lock().unwrap().push(key.clone());
            let n = {
                let mut counts = self.counts.lock().unwrap();
                let n = counts.entry(key.clone()).or_insert(0);
                *n += 1;
                *n
            };

            let script = self.scripts.get(&key).copied().unwrap_or(self.default);
            match script {
                Script::Succeed => Ok(vec![0xFF, 0xD8]),
                Script::Fail => Err(FetchError::NotFound(key)),
                Script::Hang => {
                    std::future::pending::<()>().await;
                    unreachable!()
                }
                Script::FailThenSucceed(failures) => {
                    if n <= failures {
                        Err(FetchError::Transport("connection reset".to_string()))
                    } else {
                        Ok(vec![0xFF, 0xD8])
                    }
                }
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    const IMAGE_URL: &str = "https://valhallatattoo.com/images/portfolio/kason/fineline.jpg";
    const SWAPPED_URL: &str = "https://valhallatattoo.com/images/portfolio/kason/fineline.png";
    const PLACEHOLDER_URL: &str =
        "https://valhallatattoo.com/images/portfolio/kason/placeholder.jpg";

    fn loader(fetcher: Arc<ScriptedFetcher>) -> ImageLoader {
        ImageLoader::new(fetcher, &LoaderConfig::default(), "placeholder.jpg")
    }

    fn slot() -> ImageSlot {
        ImageSlot::new(Url::parse(IMAGE_URL).unwrap(), "Tattoo by Kason")
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_source_tries_exactly_four_times() {
        let fetcher = Arc::new(ScriptedFetcher::new(Script::Hang));
        let loader = loader(fetcher.clone());
        let mut slot = slot();

        let result = loader.load(&mut slot, ConnectionQuality::FourG).await;

        assert!(matches!(
            result,
            Err(LoaderError::AllFallbacksFailed { attempts: 4, .. })
        ));
        // 1 initial + 3 retries for the original URL
        assert_eq!(fetcher.count(IMAGE_URL), 4);
        // extension swap and placeholder each tried once; no query to strip
        assert_eq!(fetcher.count(SWAPPED_URL), 1);
        assert_eq!(fetcher.count(PLACEHOLDER_URL), 1);

        assert!(matches!(slot.state, ContainerState::ErrorDisplayed { .. }));
        assert_eq!(
            slot.alt_text,
            "Image failed to load - please try refreshing the page"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_transient_failures_recover_within_budget() {
        let fetcher =
            Arc::new(ScriptedFetcher::new(Script::Fail).script(IMAGE_URL, Script::FailThenSucceed(2)));
        let loader = loader(fetcher.clone());
        let mut slot = slot();

        let loaded = loader
            .load(&mut slot, ConnectionQuality::FourG)
            .await
            .unwrap();

        assert_eq!(loaded.via, LoadRoute::Original);
        assert_eq!(fetcher.count(IMAGE_URL), 3);
        assert_eq!(slot.state, ContainerState::Loaded);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallbacks_run_in_fixed_order() {
        let fetcher = Arc::new(
            ScriptedFetcher::new(Script::Fail).script(PLACEHOLDER_URL, Script::Succeed),
        );
        let loader = loader(fetcher.clone());
        let mut slot = slot();

        let loaded = loader
            .load(&mut slot, ConnectionQuality::FourG)
            .await
            .unwrap();

        assert_eq!(loaded.via, LoadRoute::Fallback(FallbackStrategy::Placeholder));
        assert_eq!(slot.state, ContainerState::Loaded);

        let calls = fetcher.calls();
        let swap_at = calls.iter().position(|c| c == SWAPPED_URL).unwrap();
        let placeholder_at = calls.iter().position(|c| c == PLACEHOLDER_URL).unwrap();
        assert!(swap_at < placeholder_at);
        // fallbacks are single best-effort attempts
        assert_eq!(fetcher.count(SWAPPED_URL), 1);
        assert_eq!(fetcher.count(PLACEHOLDER_URL), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_strip_fallback() {
        let versioned = format!("{IMAGE_URL}?v=2");
        let swapped_versioned = format!("{SWAPPED_URL}?v=2");
        let fetcher = Arc::new(
            ScriptedFetcher::new(Script::Fail)
                .script(&versioned, Script::Fail)
                .script(&swapped_versioned, Script::Fail)
                .script(IMAGE_URL, Script::Succeed),
        );
        let loader = loader(fetcher.clone());
        let mut slot = ImageSlot::new(Url::parse(&versioned).unwrap(), "Tattoo by Kason");

        let loaded = loader
            .load(&mut slot, ConnectionQuality::FourG)
            .await
            .unwrap();

        assert_eq!(loaded.via, LoadRoute::Fallback(FallbackStrategy::StripQuery));
        assert_eq!(loaded.url.as_str(), IMAGE_URL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_schedule_is_exponential() {
        let fetcher = Arc::new(ScriptedFetcher::new(Script::Fail));
        let loader = loader(fetcher);
        let mut slot = slot();

        let started = tokio::time::Instant::now();
        let _ = loader.load(&mut slot, ConnectionQuality::FourG).await;

        // failures are immediate, so elapsed virtual time is the backoff
        // alone: 1s + 2s + 4s
        assert_eq!(started.elapsed(), Duration::from_secs(7));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failures_are_tracked_for_diagnostics() {
        let fetcher = Arc::new(ScriptedFetcher::new(Script::Fail));
        let loader = loader(fetcher);
        let mut slot = slot();

        let _ = loader.load(&mut slot, ConnectionQuality::ThreeG).await;

        let recent = loader.tracker().recent();
        assert!(!recent.is_empty());
        assert!(recent.len() <= 10);
        assert!(recent.iter().all(|e| e.connection == ConnectionQuality::ThreeG));
        assert!(recent.iter().any(|e| e.kind == LoadErrorKind::Transport));
        assert!(recent.iter().any(|e| e.kind == LoadErrorKind::Fallback));
    }

    #[tokio::test(start_paused = true)]
    async fn test_staggered_recovery_spaces_out_starts() {
        let fetcher = Arc::new(ScriptedFetcher::new(Script::Succeed));
        let loader = loader(fetcher);
        let mut slots = vec![slot(), slot(), slot()];

        let started = tokio::time::Instant::now();
        let loaded = loader
            .load_all_staggered(&mut slots, ConnectionQuality::Unknown)
            .await;

        assert_eq!(loaded, 3);
        assert_eq!(started.elapsed(), Duration::from_millis(400));
        assert!(slots.iter().all(|s| s.state == ContainerState::Loaded));
    }

    #[test]
    fn test_adaptive_timeouts() {
        assert_eq!(ConnectionQuality::Slow2g.timeout(), Duration::from_secs(30));
        assert_eq!(ConnectionQuality::TwoG.timeout(), Duration::from_secs(30));
        assert_eq!(ConnectionQuality::ThreeG.timeout(), Duration::from_secs(15));
        assert_eq!(ConnectionQuality::FourG.timeout(), Duration::from_secs(10));
        assert_eq!(ConnectionQuality::Unknown.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_connection_quality_names_round_trip() {
        let all = [
            ConnectionQuality::Slow2g,
            ConnectionQuality::TwoG,
            ConnectionQuality::ThreeG,
            ConnectionQuality::FourG,
            ConnectionQuality::Unknown,
        ];
        for quality in all {
            assert_eq!(ConnectionQuality::from_effective_type(quality.as_str()), quality);
        }
        assert_eq!(ConnectionQuality::Slow2g.as_str(), "slow-2g");
        assert_eq!(
            ConnectionQuality::from_effective_type("wimax"),
            ConnectionQuality::Unknown
        );
    }

    #[test]
    fn test_fallback_rewrites() {
        let url = Url::parse(IMAGE_URL).unwrap();

        let swapped = FallbackStrategy::SwapExtension
            .rewrite(&url, "placeholder.jpg")
            .unwrap();
        assert_eq!(swapped.as_str(), SWAPPED_URL);

        // round trip back to .jpg
        let back = FallbackStrategy::SwapExtension
            .rewrite(&swapped, "placeholder.jpg")
            .unwrap();
        assert_eq!(back.as_str(), IMAGE_URL);

        // no query to strip
        assert!(FallbackStrategy::StripQuery
            .rewrite(&url, "placeholder.jpg")
            .is_none());

        let placeholder = FallbackStrategy::Placeholder
            .rewrite(&url, "placeholder.jpg")
            .unwrap();
        assert_eq!(placeholder.as_str(), PLACEHOLDER_URL);
    }

    #[test]
    fn test_error_tracker_is_bounded() {
        let tracker = ErrorTracker::new();
        for i in 0..15 {
            tracker.record(
                LoadErrorKind::Timeout,
                format!("timeout {i}"),
                "/images/portfolio/kason/fineline.jpg",
                ConnectionQuality::Unknown,
            );
        }
        let recent = tracker.recent();
        assert_eq!(recent.len(), 10);
        // newest first
        assert_eq!(recent[0].message, "timeout 14");
    }
}
