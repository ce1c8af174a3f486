use checks::CheckOutcome;
use library::GenreReport;
use serde::Serialize;

#[derive(Debug, Default, Serialize)]
pub struct RunReport {
    pub genres: GenreReport,
    pub checks: Vec<CheckOutcome>,
}

impl RunReport {
    pub fn is_clean(&self) -> bool {
        self.genres.is_clean() && self.checks.iter().all(CheckOutcome::passed)
    }

    pub fn failure_count(&self) -> usize {
        let genre_failures = self.genres.results.len() - self.genres.passed();
        let check_failures: usize = self.checks.iter().map(|c| c.failures.len()).sum();
        genre_failures + check_failures
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for (path, failure) in self.genres.failures() {
            out.push_str(&format!("FAIL genre: {}: {}\n", path, failure));
        }
        out.push_str(&format!(
            "genre check: {} of {} files passed\n",
            self.genres.passed(),
            self.genres.results.len()
        ));
        for check in &self.checks {
            for failure in &check.failures {
                out.push_str(&format!("FAIL {} [{}]: {}\n", check.name, check.subject, failure));
            }
            let status = if check.passed() { "ok" } else { "FAILED" };
            out.push_str(&format!("{} [{}]: {}\n", check.name, check.subject, status));
        }
        out
    }
}
