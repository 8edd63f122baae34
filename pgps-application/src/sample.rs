use crate::*;

#[rustfmt::skip]
const SAMPLE_PHARMACIES: [[&str; 5]; 5] = [
    ["PHIE PLANTIER"              , "2310 AVENUE MARECHAL JUIN" , "06250", "MOUGINS", "T2"           ],
    ["PHIE SAINT MARTINS SELAS"   , "1009 AV ST MARTIN"         , "06250", "MOUGINS", "T3"           ],
    ["PHIE CHANAY ET LAUZE SELARL", "21 RUE FELIX FAURE"        , "06400", "CANNES" , "T2"           ],
    ["CARREFOUR NICE FRA076"      , "RN 202 ROUTE DE DIGNE"     , "06200", "NICE"   , "PARA ENSEIGNE"],
    ["PHIE DU MARCHE SELARL"      , "11 RUE DOCTEUR BALOUX"     , "06150", "CANNES" , "T1"           ],
];

/// Five pharmacies of the Alpes-Maritimes.
pub fn sample_table() -> Table {
    let columns = Column::ALL.iter().map(|c| c.as_str().to_string()).collect();
    let rows = SAMPLE_PHARMACIES
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();
    Table::with_rows(columns, rows)
}
