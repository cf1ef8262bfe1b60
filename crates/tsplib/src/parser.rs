//! Driver loop: reads lines, switches between header and data mode and
//! assembles the final [`Instance`].

use std::io::BufRead;

use log::debug;

use crate::{
    Instance, TsplibError, TsplibResult,
    keywords::SpecField,
    line::{LineClassifier, LineKind},
    reader::LineReader,
    sections::SectionData,
    spec::FieldTable,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParseMode {
    Header,
    Data,
}

pub(crate) struct InstanceParser<R> {
    reader: LineReader<R>,
    classifier: LineClassifier,
    fields: FieldTable,
    sections: SectionData,
    mode: ParseMode,
}

impl<R: BufRead> InstanceParser<R> {
    pub(crate) fn new(reader: R) -> TsplibResult<Self> {
        Ok(Self {
            reader: LineReader::new(reader),
            classifier: LineClassifier::new()?,
            fields: FieldTable::new(),
            sections: SectionData::default(),
            mode: ParseMode::Header,
        })
    }

    pub(crate) fn parse(mut self) -> TsplibResult<Instance> {
        loop {
            let Some(line) = self.reader.next_line()? else {
                return Err(TsplibError::UnexpectedEof);
            };
            let line_number = self.reader.line_number();

            match self.step(&line) {
                Ok(true) => continue,
                Ok(false) => break,
                Err(err) => return Err(err.at_line(line_number, line)),
            }
        }

        self.finish()
    }

    /// Handles one line. Returns `false` once the end marker is reached.
    fn step(&mut self, line: &str) -> TsplibResult<bool> {
        match self.classifier.classify(line)? {
            LineKind::Blank => {}
            LineKind::EndMarker => return Ok(false),
            LineKind::Header { key, value } => {
                if self.mode == ParseMode::Data {
                    return Err(TsplibError::SpecificationAfterData);
                }
                self.fields.apply(&key, &value)?;
            }
            LineKind::DataMarker(key) => {
                self.mode = ParseMode::Data;
                self.sections
                    .dispatch(&key, &self.fields, &mut self.reader)?;
            }
        }
        Ok(true)
    }

    fn finish(self) -> TsplibResult<Instance> {
        let Some(distances) = self.sections.distances else {
            return Err(TsplibError::MissingDistanceMatrix);
        };

        let instance = Instance {
            name: self.fields.text(SpecField::Name).map(str::to_string),
            comment: self.fields.text(SpecField::Comment).map(str::to_string),
            distances,
            positions: self.sections.positions,
        };
        debug!(
            "parsed instance name={:?} n={} positions={}",
            instance.name,
            instance.dimension(),
            instance.positions.is_some()
        );
        Ok(instance)
    }
}
