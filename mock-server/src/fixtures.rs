//! Canned IBGE data served by the mock.
//!
//! Ids and names match the live service so tests written against the mock
//! hold against the real API too.

use crate::{Distrito, Estado, Microrregiao, Municipio, Regiao};

/// (id, sigla, nome)
type RegiaoRow = (u32, &'static str, &'static str);

const NORTE: RegiaoRow = (1, "N", "Norte");
const NORDESTE: RegiaoRow = (2, "NE", "Nordeste");
const SUDESTE: RegiaoRow = (3, "SE", "Sudeste");
const SUL: RegiaoRow = (4, "S", "Sul");
const CENTRO_OESTE: RegiaoRow = (5, "CO", "Centro-Oeste");

/// (id, sigla, nome, region)
const ESTADOS: [(u32, &str, &str, RegiaoRow); 27] = [
    (11, "RO", "Rondônia", NORTE),
    (12, "AC", "Acre", NORTE),
    (13, "AM", "Amazonas", NORTE),
    (14, "RR", "Roraima", NORTE),
    (15, "PA", "Pará", NORTE),
    (16, "AP", "Amapá", NORTE),
    (17, "TO", "Tocantins", NORTE),
    (21, "MA", "Maranhão", NORDESTE),
    (22, "PI", "Piauí", NORDESTE),
    (23, "CE", "Ceará", NORDESTE),
    (24, "RN", "Rio Grande do Norte", NORDESTE),
    (25, "PB", "Paraíba", NORDESTE),
    (26, "PE", "Pernambuco", NORDESTE),
    (27, "AL", "Alagoas", NORDESTE),
    (28, "SE", "Sergipe", NORDESTE),
    (29, "BA", "Bahia", NORDESTE),
    (31, "MG", "Minas Gerais", SUDESTE),
    (32, "ES", "Espírito Santo", SUDESTE),
    (33, "RJ", "Rio de Janeiro", SUDESTE),
    (35, "SP", "São Paulo", SUDESTE),
    (41, "PR", "Paraná", SUL),
    (42, "SC", "Santa Catarina", SUL),
    (43, "RS", "Rio Grande do Sul", SUL),
    (50, "MS", "Mato Grosso do Sul", CENTRO_OESTE),
    (51, "MT", "Mato Grosso", CENTRO_OESTE),
    (52, "GO", "Goiás", CENTRO_OESTE),
    (53, "DF", "Distrito Federal", CENTRO_OESTE),
];

/// (district id, district name, municipality id, municipality name, microregion id, microregion name)
const DISTRITOS: [(u32, &str, u32, &str, u32, &str); 4] = [
    (520005005, "Abadia de Goiás", 5200050, "Abadia de Goiás", 52010, "Goiânia"),
    (520010005, "Abadiânia", 5200100, "Abadiânia", 52012, "Entorno de Brasília"),
    (310010405, "Abaeté", 3100104, "Abaeté", 31024, "Três Marias"),
    (330455705, "Rio de Janeiro", 3304557, "Rio de Janeiro", 33018, "Rio de Janeiro"),
];

fn regiao((id, sigla, nome): RegiaoRow) -> Regiao {
    Regiao {
        id,
        sigla: sigla.to_string(),
        nome: nome.to_string(),
    }
}

pub fn estados() -> Vec<Estado> {
    ESTADOS
        .iter()
        .map(|&(id, sigla, nome, regiao_row)| Estado {
            id,
            sigla: sigla.to_string(),
            nome: nome.to_string(),
            regiao: regiao(regiao_row),
        })
        .collect()
}

pub fn distritos() -> Vec<Distrito> {
    DISTRITOS
        .iter()
        .map(|&(id, nome, mun_id, mun_nome, micro_id, micro_nome)| Distrito {
            id,
            nome: nome.to_string(),
            municipio: Municipio {
                id: mun_id,
                nome: mun_nome.to_string(),
                microrregiao: Microrregiao {
                    id: micro_id,
                    nome: micro_nome.to_string(),
                },
            },
        })
        .collect()
}
