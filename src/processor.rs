use crate::classify::Classifier;
use crate::coords;
use crate::data_models::{ClassifiedSpace, SpaceRecord, Status};

/// Derives everything the map layer needs from one raw record: category,
/// coordinate, and status bucket. Pure; records are independent of each
/// other, so callers are free to fan this out.
pub fn process_record(classifier: &Classifier, record: SpaceRecord) -> ClassifiedSpace {
    let coordinate = coords::parse_latlon(&record.coordinates_raw);
    let category = classifier.classify(&record);
    let status = Status::from_raw(&record.status_raw);

    ClassifiedSpace {
        record,
        coordinate,
        category,
        status,
    }
}
