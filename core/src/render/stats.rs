//! Rendering statistics.

use alloc::{format, string::String};
use core::fmt::{self, Display, Formatter};
use core::ops::AddAssign;
use core::time::Duration;
#[cfg(feature = "std")]
use std::time::Instant;

/// Counts of items flowing through the pipeline stages, and the time
/// spent rendering them.
#[derive(Clone, Debug, Default)]
pub struct Stats {
    /// Number of frames completed.
    pub frames: usize,
    /// Time spent rendering. Only measured with the `std` feature.
    pub time: Duration,

    /// Vertices submitted and vertices assembled into quads.
    pub verts: Throughput,
    /// Quads dispatched and quads with at least one fragment accepted
    /// by the render target.
    pub quads: Throughput,
    /// Fragments rasterized and fragments written into the framebuffer.
    pub frags: Throughput,

    #[cfg(feature = "std")]
    start: Option<Instant>,
}

/// Number of items into and out of a stage.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Throughput {
    pub i: usize,
    pub o: usize,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns zeroed stats with a running timer.
    ///
    /// Without the `std` feature, there is no timer and this is equivalent
    /// to [`Stats::new`].
    pub fn start() -> Self {
        Self {
            #[cfg(feature = "std")]
            start: Some(Instant::now()),
            ..Self::default()
        }
    }

    /// Stops the timer, if running, and stores the elapsed time.
    pub fn finish(self) -> Self {
        #[cfg(feature = "std")]
        if let Some(st) = self.start {
            return Self { time: st.elapsed(), start: None, ..self };
        }
        self
    }

    /// Returns the average number of frames per second, or zero if no
    /// time has been recorded.
    pub fn fps(&self) -> f32 {
        let secs = self.time.as_secs_f32();
        if secs > 0.0 { self.frames as f32 / secs } else { 0.0 }
    }

    /// Returns the vertex, quad, and fragment throughputs averaged over
    /// the frames completed, or the totals if there are none.
    pub fn per_frame(&self) -> [Throughput; 3] {
        let n = self.frames.max(1);
        self.stages().map(|t| Throughput { i: t.i / n, o: t.o / n })
    }

    /// Returns the vertex, quad, and fragment throughputs per second, or
    /// the totals if no time has been recorded.
    pub fn per_sec(&self) -> [Throughput; 3] {
        let secs = self.time.as_secs_f32();
        if secs == 0.0 {
            return self.stages();
        }
        let rate = |n: usize| (n as f32 / secs) as usize;
        self.stages().map(|t| Throughput { i: rate(t.i), o: rate(t.o) })
    }

    fn stages(&self) -> [Throughput; 3] {
        [self.verts, self.quads, self.frags]
    }
}

impl Throughput {
    /// Returns the fraction of input items output, or `None` if there
    /// was no input.
    pub fn ratio(&self) -> Option<f32> {
        (self.i > 0).then(|| self.o as f32 / self.i as f32)
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} frames in {}, {:.1} fps",
            self.frames,
            human_time(self.time),
            self.fps()
        )?;
        writeln!(
            f,
            "{:<6}{:>8}{:>8}{:>8}{:>10}{:>8}",
            "", "in", "out", "pass", "in/frame", "in/s"
        )?;
        let rows = ["verts", "quads", "frags"]
            .into_iter()
            .zip(self.stages())
            .zip(self.per_frame().into_iter().zip(self.per_sec()));

        for ((label, tot), (per_f, per_s)) in rows {
            let pass = tot
                .ratio()
                .map_or("--".into(), |r| format!("{:.1}%", 100.0 * r));
            writeln!(
                f,
                "{label:<6}{:>8}{:>8}{pass:>8}{:>10}{:>8}",
                human_num(tot.i),
                human_num(tot.o),
                human_num(per_f.i),
                human_num(per_s.i),
            )?;
        }
        Ok(())
    }
}

impl AddAssign for Stats {
    /// Appends the counts and time of `other` to `self`.
    fn add_assign(&mut self, other: Self) {
        self.frames += other.frames;
        self.time += other.time;
        self.verts += other.verts;
        self.quads += other.quads;
        self.frags += other.frags;
    }
}

impl AddAssign for Throughput {
    fn add_assign(&mut self, rhs: Self) {
        self.i += rhs.i;
        self.o += rhs.o;
    }
}

fn human_num(n: usize) -> String {
    const UNITS: [(f32, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "k")];
    let x = n as f32;
    for (scale, unit) in UNITS {
        if x >= scale {
            return format!("{:.1}{unit}", x / scale);
        }
    }
    format!("{n}")
}

fn human_time(d: Duration) -> String {
    match d.as_secs_f32() {
        s if s < 1e-3 => format!("{:.1}µs", s * 1e6),
        s if s < 1.0 => format!("{:.1}ms", s * 1e3),
        s if s < 60.0 => format!("{s:.1}s"),
        _ => format!("{}min {:02}s", d.as_secs() / 60, d.as_secs() % 60),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    fn stats() -> Stats {
        let tp = |k: usize| Throughput { i: 12345 * k, o: 4321 * k };
        Stats {
            frames: 1234,
            time: Duration::from_millis(4321),
            verts: tp(1),
            quads: tp(2),
            frags: tp(3),
            ..Stats::new()
        }
    }

    #[test]
    fn stats_display() {
        assert_eq!(
            stats().to_string(),
            "1234 frames in 4.3s, 285.6 fps\n\
             \x20           in     out    pass  in/frame    in/s\n\
             verts    12.3k    4.3k   35.0%        10    2.9k\n\
             quads    24.7k    8.6k   35.0%        20    5.7k\n\
             frags    37.0k   13.0k   35.0%        30    8.6k\n"
        );
    }

    #[test]
    fn empty_stats_display() {
        let s = Stats::new().to_string();
        assert!(s.starts_with("0 frames in 0.0µs, 0.0 fps\n"), "{s}");
        assert!(s.ends_with("frags        0       0      --         0       0\n"));
    }

    #[test]
    fn averages() {
        let s = stats();
        assert_eq!(s.per_frame()[0], Throughput { i: 10, o: 3 });
        assert_eq!(s.per_sec()[2].i, 8570);
        assert_eq!(Stats::new().per_sec(), [Throughput::default(); 3]);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut a = Stats::new();
        a.frags = Throughput { i: 10, o: 4 };
        let b = Stats {
            frames: 1,
            frags: Throughput { i: 5, o: 5 },
            ..Stats::new()
        };
        a += b.clone();
        a += b;
        assert_eq!(a.frames, 2);
        assert_eq!(a.frags, Throughput { i: 20, o: 14 });
        assert_eq!(a.quads, Throughput::default());
    }

    #[test]
    fn finish_without_start_keeps_time() {
        let s = Stats { time: Duration::from_millis(5), ..Stats::new() };
        assert_eq!(s.finish().time, Duration::from_millis(5));
    }

    #[test]
    fn human_nums() {
        assert_eq!(human_num(10), "10");
        assert_eq!(human_num(999), "999");
        assert_eq!(human_num(1_234), "1.2k");
        assert_eq!(human_num(123_456), "123.5k");
        assert_eq!(human_num(1_234_567), "1.2M");
        assert_eq!(human_num(1_234_567_890), "1.2G");
    }

    #[test]
    fn human_times() {
        assert_eq!(human_time(Duration::from_micros(123)), "123.0µs");
        assert_eq!(human_time(Duration::from_millis(123)), "123.0ms");
        assert_eq!(human_time(Duration::from_millis(1234)), "1.2s");
        assert_eq!(human_time(Duration::from_secs(1234)), "20min 34s");
    }
}
