//! Prometheus metrics collection and formatting.
//!
//! Samples are recorded by the HTTP layer from the values the task store
//! returns, and rendered in Prometheus text exposition format.

use std::fmt::Write;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use crate::store::Extraction;

/// Upper bounds of the input pool size histogram.
const POOL_SIZE_BUCKETS: [f64; 9] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0];

#[derive(Debug, Default, Clone, Copy)]
struct Summary {
    sum: f64,
    count: u64,
}

impl Summary {
    fn observe(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }
}

#[derive(Debug, Default, Clone)]
struct Histogram {
    /// Non-cumulative counts per bucket of `POOL_SIZE_BUCKETS`.
    buckets: [u64; POOL_SIZE_BUCKETS.len()],
    sum: f64,
    count: u64,
}

impl Histogram {
    fn observe(&mut self, value: f64) {
        if let Some(i) = POOL_SIZE_BUCKETS.iter().position(|&bound| value <= bound) {
            self.buckets[i] += 1;
        }
        self.sum += value;
        self.count += 1;
    }
}

#[derive(Debug, Default, Clone)]
struct Samples {
    processing: Summary,
    search: Summary,
    input_size: Histogram,
    task_list_size: usize,
}

/// In-process metrics registry for the task service.
#[derive(Debug, Default)]
pub struct ServiceMetrics {
    samples: Mutex<Samples>,
}

impl ServiceMetrics {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn samples(&self) -> MutexGuard<'_, Samples> {
        // Samples stay valid even if a writer panicked mid-update.
        self.samples.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record the outcome of one extraction.
    pub fn record_extraction(&self, extraction: &Extraction) {
        let mut samples = self.samples();
        samples.processing.observe(extraction.total_duration.as_secs_f64());
        samples.search.observe(extraction.search_duration.as_secs_f64());
        samples.input_size.observe(extraction.input_size as f64);
        samples.task_list_size = extraction.remaining_size;
    }

    /// Record a failed extraction that still held the pool for `elapsed`.
    pub fn record_failed_extraction(&self, input_size: usize, elapsed: Duration) {
        let mut samples = self.samples();
        samples.processing.observe(elapsed.as_secs_f64());
        samples.input_size.observe(input_size as f64);
    }

    /// Record the pool size after it changed.
    pub fn set_task_list_size(&self, size: usize) {
        self.samples().task_list_size = size;
    }

    /// Format all metrics as Prometheus text.
    pub fn render(&self) -> String {
        let samples = self.samples().clone();
        let mut output = String::new();

        write_summary(
            &mut output,
            "taskopt_processing_duration_seconds",
            "Time it takes to select the most profitable compatible tasks, in seconds",
            samples.processing,
        );
        write_summary(
            &mut output,
            "taskopt_search_duration_seconds",
            "Time it takes to run the clique search on the task compatibility graph, in seconds",
            samples.search,
        );
        write_histogram(
            &mut output,
            "taskopt_input_task_list_size",
            "Size of the task list given to each optimization pass",
            &samples.input_size,
        );

        writeln!(output, "# HELP taskopt_task_list_size Number of pending tasks").ok();
        writeln!(output, "# TYPE taskopt_task_list_size gauge").ok();
        writeln!(output, "taskopt_task_list_size {}", samples.task_list_size).ok();

        output
    }
}

fn write_summary(output: &mut String, name: &str, help: &str, summary: Summary) {
    writeln!(output, "# HELP {name} {help}").ok();
    writeln!(output, "# TYPE {name} summary").ok();
    writeln!(output, "{name}_sum {}", summary.sum).ok();
    writeln!(output, "{name}_count {}", summary.count).ok();
}

fn write_histogram(output: &mut String, name: &str, help: &str, histogram: &Histogram) {
    writeln!(output, "# HELP {name} {help}").ok();
    writeln!(output, "# TYPE {name} histogram").ok();

    let mut cumulative = 0u64;
    for (bound, count) in POOL_SIZE_BUCKETS.iter().zip(histogram.buckets) {
        cumulative += count;
        writeln!(output, "{name}_bucket{{le=\"{bound}\"}} {cumulative}").ok();
    }
    writeln!(output, "{name}_bucket{{le=\"+Inf\"}} {}", histogram.count).ok();
    writeln!(output, "{name}_sum {}", histogram.sum).ok();
    writeln!(output, "{name}_count {}", histogram.count).ok();
}
