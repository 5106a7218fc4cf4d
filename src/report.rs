use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::stats::SimulationResult;
use crate::sweep::SweepPoint;

const RESULT_HEADER: &str = "rho,K,EN,P_idle,P_loss,generated,dropped,observers";
const SWEEP_HEADER: &str = "rho,K,EN,EN_std,P_loss,P_loss_std,P_idle";

/// Writes result rows as CSV, header first.
pub struct CsvReport<W> where W: Write {
    out: W,
    header_written: bool,
}

impl CsvReport<BufWriter<File>> {
    pub fn create<P: AsRef<Path>> (path: P) -> Result<Self> {
        Ok(CsvReport::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W> CsvReport<W> where W: Write {
    pub fn new (out: W) -> Self {
        CsvReport { out, header_written: false }
    }

    fn header (&mut self, header: &str) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "{}", header)?;
            self.header_written = true;
        }
        Ok(())
    }

    pub fn write_result (&mut self, res: &SimulationResult) -> Result<()> {
        self.header(RESULT_HEADER)?;
        writeln!(self.out, "{},{},{},{},{},{},{},{}",
                 res.offered_load, res.buffer_size, res.mean_number_in_system,
                 res.idle_probability, res.loss_probability,
                 res.arrivals_generated, res.dropped, res.observers)?;
        Ok(())
    }

    pub fn write_sweep (&mut self, points: &[SweepPoint]) -> Result<()> {
        self.header(SWEEP_HEADER)?;
        for p in points {
            writeln!(self.out, "{},{},{},{},{},{},{}",
                     p.rho, p.buffer_size, p.mean_en, p.std_en,
                     p.mean_loss, p.std_loss, p.mean_idle)?;
        }
        Ok(())
    }

    pub fn into_inner (mut self) -> Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
