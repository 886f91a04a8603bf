// src/template/intake_form.rs

//! Declarative schema of the intake questionnaire.
//!
//! The order of [`SCHEMA`] is the canonical field order: it drives both the
//! serialized record (token and exported file) and the rendering order of
//! each section.

/// One navigable section of the form. Each section owns one record category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Identification,
    Childhood,
    Adulthood,
    Social,
    Family,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Identification,
        Section::Childhood,
        Section::Adulthood,
        Section::Social,
        Section::Family,
    ];

    /// Category key used in the serialized record.
    pub fn key(self) -> &'static str {
        match self {
            Section::Identification => "identification",
            Section::Childhood => "infancia",
            Section::Adulthood => "idadeAdulta",
            Section::Social => "social",
            Section::Family => "familia",
        }
    }

    /// Short label for the navigation tabs.
    pub fn tab_label(self) -> &'static str {
        match self {
            Section::Identification => "Identificação",
            Section::Childhood => "Infância & Adolescência",
            Section::Adulthood => "Idade Adulta",
            Section::Social => "Interação Social",
            Section::Family => "Antecedentes Familiares",
        }
    }

    /// Heading shown above the section's fields.
    pub fn title(self) -> &'static str {
        match self {
            Section::Identification => "3. Identificação do Paciente",
            Section::Childhood => "4.4.1 Infância e Adolescência",
            Section::Adulthood => "4.4.2 Idade Adulta e Madura",
            Section::Social => "4.4.3 Interação Social",
            Section::Family => "4.5 Antecedentes Familiares",
        }
    }

    /// 0-based position in [`Section::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn fields(self) -> impl Iterator<Item = &'static FieldSpec> {
        SCHEMA.iter().filter(move |f| f.section == self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Single-line free text.
    Text,
    /// Multi-line free text.
    MultiLine,
    /// One of a fixed option list, or empty for "not answered".
    Choice(&'static [&'static str]),
}

/// The field is editable only while `key` (same section) holds `equals`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dependency {
    pub key: &'static str,
    pub equals: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub section: Section,
    pub key: &'static str,
    pub label: &'static str,
    pub sub_label: Option<&'static str>,
    pub placeholder: Option<&'static str>,
    pub kind: InputKind,
    pub default: &'static str,
    pub enabled_when: Option<Dependency>,

    /// UI-only group heading rendered before this field.
    pub heading: Option<&'static str>,
}

impl FieldSpec {
    const fn new(section: Section, key: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            section,
            key,
            label,
            sub_label: None,
            placeholder: None,
            kind,
            default: "",
            enabled_when: None,
            heading: None,
        }
    }

    const fn sub(mut self, sub_label: &'static str) -> Self {
        self.sub_label = Some(sub_label);
        self
    }

    const fn hint(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    const fn default_to(mut self, value: &'static str) -> Self {
        self.default = value;
        self
    }

    const fn enabled_when(mut self, key: &'static str, equals: &'static str) -> Self {
        self.enabled_when = Some(Dependency { key, equals });
        self
    }

    const fn after_heading(mut self, heading: &'static str) -> Self {
        self.heading = Some(heading);
        self
    }
}

pub const YES: &str = "Sim";
pub const NO: &str = "Não";

const YES_NO: &[&str] = &[YES, NO];
const SEXO: &[&str] = &["Masculino", "Feminino", "Outro"];
const ESTADO_CIVIL: &[&str] = &[
    "Solteiro(a)",
    "Casado(a)",
    "Divorciado(a)",
    "Viúvo(a)",
    "União Estável",
];
const ETNIA: &[&str] = &["Branco", "Negro", "Indígena", "Mestiço", "Outro"];
const RESIDENCIA: &[&str] = &["Própria", "Alugada", "Outra"];
const FUMANTE: &[&str] = &[YES, NO, "Ex-fumante"];
const CLASSE_SOCIAL: &[&str] = &["A (Alta)", "B (Média)", "C (Média-baixa)", "D (Baixa)"];
const MUDANCA_SOCIAL: &[&str] = &["Subiu", "Baixou", "Manteve"];
const MIGRACAO: &[&str] = &["Sim (Imigrante)", "Sim (Emigrante)", NO];

use InputKind::{Choice, MultiLine, Text};
use Section::{Adulthood, Childhood, Family, Identification, Social};

const fn text(section: Section, key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(section, key, label, Text)
}

const fn area(section: Section, key: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec::new(section, key, label, MultiLine)
}

const fn choice(
    section: Section,
    key: &'static str,
    label: &'static str,
    options: &'static [&'static str],
) -> FieldSpec {
    FieldSpec::new(section, key, label, Choice(options))
}

/// Every field of the record, grouped by section, in canonical order.
pub static SCHEMA: &[FieldSpec] = &[
    // --------------------------------------------------
    // identification
    // --------------------------------------------------
    text(Identification, "nome", "Nome completo"),
    text(Identification, "numeroEstudo", "Número do paciente no estudo"),
    text(Identification, "rg", "RG").sub("Incluir órgão emissor e UF"),
    text(Identification, "cpf", "CPF"),
    text(Identification, "endereco", "Endereço completo")
        .sub("Rua, número, apto, bairro, cidade, Estado, CEP"),
    text(Identification, "email", "E-mail"),
    text(Identification, "telefoneFixo", "Telefone Fixo (com DDD)"),
    text(Identification, "celular", "Celular (com DDD)"),
    text(Identification, "dataNascimento", "Data de Nascimento").hint("Dia/Mês/Ano"),
    choice(Identification, "sexo", "Sexo", SEXO),
    choice(Identification, "estadoCivil", "Estado Civil", ESTADO_CIVIL),
    text(Identification, "escolaridade", "Escolaridade"),
    text(Identification, "profissao", "Profissão Atual"),
    text(Identification, "religiao", "Religião"),
    choice(Identification, "etnia", "Grupo Étnico", ETNIA),
    text(Identification, "procedencia", "Procedência").sub("Região do país ou nação estrangeira"),
    text(Identification, "tempoUltimoEmprego", "Tempo no último emprego"),
    choice(Identification, "desempregado", "Está desempregado(a)?", YES_NO).default_to(NO),
    choice(Identification, "aposentado", "Aposentado(a)?", YES_NO).default_to(NO),
    text(Identification, "tempoAposentado", "Há quanto tempo?").enabled_when("aposentado", YES),
    choice(Identification, "contaPropria", "Trabalha por conta própria?", YES_NO).default_to(NO),
    text(Identification, "fazOQue", "Fazendo o que?").enabled_when("contaPropria", YES),
    choice(Identification, "tipoResidencia", "Tipo de Residência", RESIDENCIA),
    text(Identification, "moraComQuem", "Reside com os pais ou parentes?").hint("Se sim, quais?"),
    area(Identification, "porqueMoraComPais", "Se reside com pais/parentes, por que?"),
    choice(Identification, "pobrezaExtrema", "Vive ou viveu em pobreza extrema?", YES_NO)
        .default_to(NO),
    // --------------------------------------------------
    // infancia
    // --------------------------------------------------
    area(Childhood, "prenatal", "Pré-natal").sub("Gestação, intoxicações, enfermidades maternas, etc."),
    text(Childhood, "tipoParto", "Tipo de parto").hint("Normal, Cesariana, etc."),
    area(Childhood, "condicoesNascimento", "Condições do nascimento")
        .sub("Peso, anóxia, icterícia, etc."),
    text(Childhood, "posicaoProle", "Posição na prole").hint("Ex: 1º de 3 irmãos"),
    text(Childhood, "numeroIrmaos", "Número de irmãos/irmãs").sub("Incluir meio-irmãos"),
    area(Childhood, "desenvolvimento", "Desenvolvimento psicomotor")
        .sub("Idade que andou, falou, escola, distúrbios, etc."),
    area(Childhood, "doencasInfancia", "Doenças importantes na infância/adolescência"),
    area(Childhood, "cirurgiasInfancia", "Cirurgias na infância/adolescência"),
    choice(Childhood, "epilepsia", "Teve epilepsia?", YES_NO).default_to(NO),
    area(Childhood, "traumatismosInfancia", "Traumatismos importantes")
        .sub("Acidentes, quedas, fraturas, TC..."),
    // --------------------------------------------------
    // idadeAdulta
    // --------------------------------------------------
    area(Adulthood, "traumatismos", "Traumatismos importantes")
        .sub("Acidentes, atropelamento, quedas..."),
    area(Adulthood, "doencasCirurgias", "Doenças e cirurgias importantes"),
    area(Adulthood, "tratamentos", "Tratamentos clínicos realizados"),
    area(Adulthood, "antecedentesPsiquiatricos", "Antecedentes psiquiátricos")
        .sub("Ambulatorial, internação, medicamentos..."),
    choice(Adulthood, "fumante", "É fumante?", FUMANTE)
        .sub("Cigarro, cachimbo, charuto")
        .default_to(NO),
    text(Adulthood, "alcool", "Uso de álcool").hint("Frequência e quantidade"),
    text(Adulthood, "atividadeFisica", "Atividades físicas/esportivas").hint("Quais e frequência"),
    area(Adulthood, "sono", "Padrão atual do sono"),
    area(Adulthood, "nutricional", "Padrão nutricional atual")
        .sub("Obesidade, magreza, dietas, distúrbios..."),
    // --------------------------------------------------
    // social
    // --------------------------------------------------
    area(Social, "relacaoFamilia", "Relacionamento com familiares").sub("Pais, irmãos..."),
    area(Social, "amigosInfancia", "Amigos de infância/adolescência"),
    area(Social, "amigosAdulto", "Amigos na idade adulta/atual"),
    area(Social, "escolaInfancia", "Desempenho escolar (infância/adolescência)"),
    area(Social, "ensinoSuperior", "Desempenho ensino médio/superior"),
    text(Social, "cursos", "Cursos que participou"),
    area(Social, "atividadesProfissionaisAptidao", "Atividades profissionais apto a exercer"),
    text(Social, "primeiroEmprego", "Primeiro emprego").sub("Tipo, data, período"),
    text(Social, "empregoAtual", "Emprego atual").sub("Há quanto tempo"),
    text(Social, "relacaoTrabalho", "Relacionamento com colegas"),
    area(Social, "matrimonio", "Matrimônio/Relacionamentos")
        .sub("Datas, conflitos, filhos, número de uniões..."),
    text(Social, "lazer", "Atividades de lazer"),
    text(Social, "associacoes", "Associações, clubes, partidos"),
    // --------------------------------------------------
    // familia
    // --------------------------------------------------
    text(Family, "idadePais", "Idade atual dos pais"),
    area(Family, "paisUnidos", "Status civil dos pais").sub("Unidos? Separados? Desde quando?"),
    area(Family, "paisVivos", "Vivos ou falecidos?").sub("Especificar quem"),
    area(Family, "causaMortePais", "Se falecidos").sub("Causa e idade do óbito"),
    text(Family, "idadePacienteMortePais", "Idade do paciente ao óbito dos pais"),
    choice(Family, "classeSocialPais", "Classe socioeconômica dos pais", CLASSE_SOCIAL),
    choice(Family, "mudancaSocial", "Mudança de classe social?", MUDANCA_SOCIAL),
    choice(Family, "migracao", "Família imigrante/emigrante?", MIGRACAO),
    text(Family, "ocupacaoPais", "Ocupação dos pais"),
    text(Family, "escolaridadePais", "Escolaridade dos pais"),
    area(Family, "doencaMentalPais", "Doença mental nos pais?"),
    area(Family, "dependenciaPais", "Dependência química nos pais?"),
    area(Family, "geneticaPais", "Doenças genéticas nos pais?"),
    area(Family, "violenciaDomestica", "Histórico de violência doméstica?"),
    area(Family, "doencaMentalParentes", "Doença mental em parentes?")
        .sub("Especificar grau")
        .after_heading("Outros Parentes"),
    area(Family, "geneticaParentes", "Doenças genéticas em parentes?"),
    area(Family, "tracosPersonalidade", "Traços de personalidade patológicos?")
        .sub("Agressividade, manipulação, etc. (Pais/Parentes)"),
    area(Family, "suicidioFamilia", "Antecedentes de suicídio?"),
    area(Family, "viciosFamilia", "Antecedentes de vícios/jogos?"),
    area(Family, "condutaAntissocial", "Conduta antissocial/criminosa?"),
    area(Family, "parentesPresos", "Parente preso?").sub("Quem e motivo"),
];

/// Position of `(section, key)` in [`SCHEMA`].
pub fn field_index(section: Section, key: &str) -> Option<usize> {
    SCHEMA
        .iter()
        .position(|f| f.section == section && f.key == key)
}

pub fn field_spec(section: Section, key: &str) -> Option<&'static FieldSpec> {
    field_index(section, key).map(|i| &SCHEMA[i])
}

// ======================================================
// Unit Tests
// ======================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn schema_has_expected_field_counts_per_section() {
        let counts: Vec<usize> = Section::ALL.iter().map(|s| s.fields().count()).collect();
        assert_eq!(counts, vec![26, 10, 9, 13, 21]);
        assert_eq!(SCHEMA.len(), 79);
    }

    #[test]
    fn schema_is_grouped_by_section_in_order() {
        let mut last = 0usize;
        for f in SCHEMA {
            assert!(f.section.index() >= last, "{} out of order", f.key);
            last = f.section.index();
        }
    }

    #[test]
    fn field_keys_are_unique_within_section() {
        for s in Section::ALL {
            let keys: BTreeSet<&str> = s.fields().map(|f| f.key).collect();
            assert_eq!(keys.len(), s.fields().count(), "duplicate key in {}", s.key());
        }
    }

    #[test]
    fn choice_defaults_are_valid_options() {
        for f in SCHEMA {
            if let InputKind::Choice(options) = f.kind {
                assert!(
                    f.default.is_empty() || options.contains(&f.default),
                    "{} default {:?} not an option",
                    f.key,
                    f.default
                );
            } else {
                assert!(f.default.is_empty(), "{} free text should default empty", f.key);
            }
        }
    }

    #[test]
    fn dependencies_point_at_choice_fields_in_same_section() {
        for f in SCHEMA {
            if let Some(dep) = f.enabled_when {
                let target = field_spec(f.section, dep.key).expect("dependency target exists");
                match target.kind {
                    InputKind::Choice(options) => assert!(options.contains(&dep.equals)),
                    _ => panic!("{} depends on non-choice field {}", f.key, dep.key),
                }
            }
        }
    }

    #[test]
    fn field_index_unknown_key_is_none() {
        assert_eq!(field_index(Section::Childhood, "nome"), None);
        assert_eq!(field_index(Section::Identification, "nome"), Some(0));
    }
}
