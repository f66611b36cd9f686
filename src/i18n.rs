//! i18n.rs
//!
//! Translation catalogs for the five supported locales.
//!
//! A catalog entry is either a static string or a formatting function of
//! typed parameters. Fun-fact values arrive already formatted; the catalog
//! only wraps them in a sentence.

use std::fmt;
use std::str::FromStr;

use crate::facts::{FunFactData, FunFactKey};
use crate::validate::ValidationError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Es,
    Pt,
    Hi,
    Fr,
}

pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    pub const ALL: [Locale; 5] = [Locale::En, Locale::Es, Locale::Pt, Locale::Hi, Locale::Fr];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Pt => "pt",
            Locale::Hi => "hi",
            Locale::Fr => "fr",
        }
    }

    /// Native display name.
    pub fn label(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Es => "Español",
            Locale::Pt => "Português",
            Locale::Hi => "हिन्दी",
            Locale::Fr => "Français",
        }
    }

    /// Flag emoji shown next to the label.
    pub fn flag(self) -> &'static str {
        match self {
            Locale::En => "🇺🇸",
            Locale::Es => "🇪🇸",
            Locale::Pt => "🇧🇷",
            Locale::Hi => "🇮🇳",
            Locale::Fr => "🇫🇷",
        }
    }

    /// Matches any language tag that starts with a supported code
    /// (`"es"`, `"es-MX"`, `"pt_BR.UTF-8"`).
    pub fn from_code(tag: &str) -> Option<Locale> {
        let lower = tag.trim().to_ascii_lowercase();
        Locale::ALL
            .into_iter()
            .find(|locale| lower.starts_with(locale.code()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::from_code(s).ok_or_else(|| {
            let supported: Vec<_> = Locale::ALL.iter().map(|l| l.code()).collect();
            format!("unsupported locale {s:?} (expected one of {})", supported.join(", "))
        })
    }
}

/// First supported locale in a preference list, English otherwise.
pub fn detect_locale<I, S>(preferred: I) -> Locale
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    preferred
        .into_iter()
        .find_map(|tag| Locale::from_code(tag.as_ref()))
        .unwrap_or(DEFAULT_LOCALE)
}

pub struct StatsText {
    pub title: &'static str,
    pub born_on: &'static str,
    pub you_are: &'static str,
    pub years_months_days: fn(i32, i32, i32) -> String,
    pub old: &'static str,
}

pub struct DateInputText {
    pub error_empty: &'static str,
    pub error_future: &'static str,
    pub error_invalid: &'static str,
}

pub struct BodyText {
    pub section_title: &'static str,
    pub heartbeats: &'static str,
    pub breaths: &'static str,
    pub blinks: &'static str,
    pub sleep_years: &'static str,
    pub meals: &'static str,
    pub water: &'static str,
}

pub struct JourneyText {
    pub section_title: &'static str,
    pub space_km: &'static str,
    pub walked: &'static str,
    pub sunrises: &'static str,
    pub full_moons: &'static str,
    pub laughs: &'static str,
    pub dreams: &'static str,
}

pub struct LifeGridText {
    pub title: &'static str,
    pub description: fn(&str, &str) -> String,
    pub weeks_lived: &'static str,
    pub weeks_remaining: &'static str,
    pub weeks_per_year: &'static str,
}

pub struct TimePerspectiveText {
    pub title: &'static str,
    pub days_lived: &'static str,
    pub days_remaining: &'static str,
    pub life_completed: &'static str,
    pub life_ahead: &'static str,
    pub disclaimer: &'static str,
}

pub struct FunFactText {
    pub title: &'static str,
    pub moon_trips: fn(&str) -> String,
    pub sun_trips: fn(&str) -> String,
    pub heart_billion: fn(&str) -> String,
    pub heart_million: fn(&str) -> String,
    pub books: fn(&str) -> String,
    pub pizza: fn(&str) -> String,
    pub hair: fn(&str) -> String,
    pub nails: fn(&str) -> String,
    pub words: fn(&str) -> String,
}

pub struct CardText {
    pub title: &'static str,
    pub born: &'static str,
    pub heartbeats: &'static str,
    pub breaths: &'static str,
    pub space_km: &'static str,
    pub days_lived: &'static str,
    pub sleep_years: &'static str,
    pub full_moons: &'static str,
    pub life_progress: &'static str,
    pub age_text: fn(i32, i32, i32) -> String,
    pub watermark: &'static str,
}

pub struct Catalog {
    pub locale: Locale,
    pub stats: StatsText,
    pub date_input: DateInputText,
    pub body: BodyText,
    pub journey: JourneyText,
    pub life_grid: LifeGridText,
    pub time_perspective: TimePerspectiveText,
    pub fun_facts: FunFactText,
    pub card: CardText,
}

impl Catalog {
    /// Sentence for one fun fact.
    pub fn fun_fact(&self, fact: &FunFactData) -> String {
        let t = &self.fun_facts;
        let render = match fact.key {
            FunFactKey::MoonTrips => t.moon_trips,
            FunFactKey::SunTrips => t.sun_trips,
            FunFactKey::HeartBillion => t.heart_billion,
            FunFactKey::HeartMillion => t.heart_million,
            FunFactKey::Books => t.books,
            FunFactKey::Pizza => t.pizza,
            FunFactKey::Hair => t.hair,
            FunFactKey::Nails => t.nails,
            FunFactKey::Words => t.words,
        };
        render(&fact.value)
    }

    /// Message shown for a rejected birth date.
    pub fn validation_error(&self, err: &ValidationError) -> &'static str {
        match err {
            ValidationError::Empty => self.date_input.error_empty,
            ValidationError::Future(_) => self.date_input.error_future,
            ValidationError::Invalid(_) | ValidationError::TooOld { .. } => {
                self.date_input.error_invalid
            }
        }
    }
}

pub fn catalog(locale: Locale) -> &'static Catalog {
    match locale {
        Locale::En => &EN,
        Locale::Es => &ES,
        Locale::Pt => &PT,
        Locale::Hi => &HI,
        Locale::Fr => &FR,
    }
}

// ============================================================
// English
// ============================================================

static EN: Catalog = Catalog {
    locale: Locale::En,
    stats: StatsText {
        title: "Your Life in Numbers",
        born_on: "Born on",
        you_are: "— You are",
        years_months_days: |y, m, d| format!("{y} years, {m} months, and {d} days"),
        old: "old.",
    },
    date_input: DateInputText {
        error_empty: "Please select your birth date",
        error_future: "Birth date cannot be in the future!",
        error_invalid: "Please enter a valid birth date",
    },
    body: BodyText {
        section_title: "📊 Your Body Stats",
        heartbeats: "Heartbeats",
        breaths: "Breaths Taken",
        blinks: "Eye Blinks",
        sleep_years: "Years Sleeping",
        meals: "Meals Eaten",
        water: "Liters of Water",
    },
    journey: JourneyText {
        section_title: "🚀 Your Journey",
        space_km: "KM Through Space",
        walked: "KM Walked",
        sunrises: "Sunrises",
        full_moons: "Full Moons",
        laughs: "Times Laughed",
        dreams: "Dreams Had",
    },
    life_grid: LifeGridText {
        title: "🗓️ Your Life in Weeks",
        description: |lived, total| {
            format!("Each square = 1 week. You've lived {lived} of {total} weeks.")
        },
        weeks_lived: "Weeks lived",
        weeks_remaining: "Weeks remaining",
        weeks_per_year: "Each row = 1 year (52 weeks)",
    },
    time_perspective: TimePerspectiveText {
        title: "⏳ Time Perspective",
        days_lived: "Days Lived",
        days_remaining: "Days Remaining*",
        life_completed: "Life Completed",
        life_ahead: "Life Ahead*",
        disclaimer: "* Based on average life expectancy of 80 years. Make every day count! 💪",
    },
    fun_facts: FunFactText {
        title: "🎲 Fun Facts About Your Life",
        moon_trips: |n| format!("You've traveled {n} times the distance to the Moon through space! 🌙"),
        sun_trips: |n| format!("That's {n} round trips to the Sun! ☀️"),
        heart_billion: |n| format!("Your heart has beaten over {n} BILLION times! ❤️"),
        heart_million: |n| format!("Your heart has beaten {n} million times! ❤️"),
        books: |n| format!("If you read 1 book per week, you could've read {n} books! 📚"),
        pizza: |n| format!("You've probably eaten around {n} slices of pizza! 🍕"),
        hair: |n| format!("Your hair has grown approximately {n} meters total! 💇"),
        nails: |n| format!("Your nails have grown about {n} cm! 💅"),
        words: |n| format!("You've spoken approximately {n} million words! 🗣️"),
    },
    card: CardText {
        title: "✨ Life Stats ✨",
        born: "Born",
        heartbeats: "Heartbeats",
        breaths: "Breaths",
        space_km: "KM in Space",
        days_lived: "Days Lived",
        sleep_years: "Years Sleeping",
        full_moons: "Full Moons",
        life_progress: "Life Progress",
        age_text: |y, m, d| format!("{y} years, {m} months, {d} days old"),
        watermark: "🌐 lifestats.app — Discover your life in numbers",
    },
};

// ============================================================
// Español
// ============================================================

static ES: Catalog = Catalog {
    locale: Locale::Es,
    stats: StatsText {
        title: "Tu Vida en Números",
        born_on: "Nacido/a el",
        you_are: "— Tienes",
        years_months_days: |y, m, d| format!("{y} años, {m} meses y {d} días"),
        old: "de vida.",
    },
    date_input: DateInputText {
        error_empty: "Por favor selecciona tu fecha de nacimiento",
        error_future: "¡La fecha no puede ser en el futuro!",
        error_invalid: "Por favor ingresa una fecha válida",
    },
    body: BodyText {
        section_title: "📊 Estadísticas de tu Cuerpo",
        heartbeats: "Latidos del Corazón",
        breaths: "Respiraciones",
        blinks: "Parpadeos",
        sleep_years: "Años Durmiendo",
        meals: "Comidas",
        water: "Litros de Agua",
    },
    journey: JourneyText {
        section_title: "🚀 Tu Viaje",
        space_km: "KM por el Espacio",
        walked: "KM Caminados",
        sunrises: "Amaneceres",
        full_moons: "Lunas Llenas",
        laughs: "Veces que Reíste",
        dreams: "Sueños",
    },
    life_grid: LifeGridText {
        title: "🗓️ Tu Vida en Semanas",
        description: |lived, total| {
            format!("Cada cuadro = 1 semana. Has vivido {lived} de {total} semanas.")
        },
        weeks_lived: "Semanas vividas",
        weeks_remaining: "Semanas restantes",
        weeks_per_year: "Cada fila = 1 año (52 semanas)",
    },
    time_perspective: TimePerspectiveText {
        title: "⏳ Perspectiva del Tiempo",
        days_lived: "Días Vividos",
        days_remaining: "Días Restantes*",
        life_completed: "Vida Completada",
        life_ahead: "Vida por Delante*",
        disclaimer: "* Basado en expectativa de vida promedio de 80 años. ¡Haz que cada día cuente! 💪",
    },
    fun_facts: FunFactText {
        title: "🎲 Datos Curiosos de tu Vida",
        moon_trips: |n| format!("¡Has viajado {n} veces la distancia a la Luna por el espacio! 🌙"),
        sun_trips: |n| format!("¡Son {n} viajes de ida y vuelta al Sol! ☀️"),
        heart_billion: |n| format!("¡Tu corazón ha latido más de {n} MIL MILLONES de veces! ❤️"),
        heart_million: |n| format!("¡Tu corazón ha latido {n} millones de veces! ❤️"),
        books: |n| format!("Si leyeras 1 libro por semana, ¡habrías leído {n} libros! 📚"),
        pizza: |n| format!("¡Probablemente has comido alrededor de {n} rebanadas de pizza! 🍕"),
        hair: |n| format!("¡Tu cabello ha crecido aproximadamente {n} metros en total! 💇"),
        nails: |n| format!("¡Tus uñas han crecido unos {n} cm! 💅"),
        words: |n| format!("¡Has dicho aproximadamente {n} millones de palabras! 🗣️"),
    },
    card: CardText {
        title: "✨ Life Stats ✨",
        born: "Nacido/a el",
        heartbeats: "Latidos",
        breaths: "Respiraciones",
        space_km: "KM en el Espacio",
        days_lived: "Días Vividos",
        sleep_years: "Años Durmiendo",
        full_moons: "Lunas Llenas",
        life_progress: "Progreso de Vida",
        age_text: |y, m, d| format!("{y} años, {m} meses, {d} días"),
        watermark: "🌐 lifestats.app — Descubre tu vida en números",
    },
};

// ============================================================
// Português
// ============================================================

static PT: Catalog = Catalog {
    locale: Locale::Pt,
    stats: StatsText {
        title: "Sua Vida em Números",
        born_on: "Nascido/a em",
        you_are: "— Você tem",
        years_months_days: |y, m, d| format!("{y} anos, {m} meses e {d} dias"),
        old: "de vida.",
    },
    date_input: DateInputText {
        error_empty: "Por favor selecione sua data de nascimento",
        error_future: "A data não pode ser no futuro!",
        error_invalid: "Por favor insira uma data válida",
    },
    body: BodyText {
        section_title: "📊 Estatísticas do Corpo",
        heartbeats: "Batimentos Cardíacos",
        breaths: "Respirações",
        blinks: "Piscadas",
        sleep_years: "Anos Dormindo",
        meals: "Refeições",
        water: "Litros de Água",
    },
    journey: JourneyText {
        section_title: "🚀 Sua Jornada",
        space_km: "KM pelo Espaço",
        walked: "KM Caminhados",
        sunrises: "Nascer do Sol",
        full_moons: "Luas Cheias",
        laughs: "Vezes que Riu",
        dreams: "Sonhos",
    },
    life_grid: LifeGridText {
        title: "🗓️ Sua Vida em Semanas",
        description: |lived, total| {
            format!("Cada quadrado = 1 semana. Você viveu {lived} de {total} semanas.")
        },
        weeks_lived: "Semanas vividas",
        weeks_remaining: "Semanas restantes",
        weeks_per_year: "Cada linha = 1 ano (52 semanas)",
    },
    time_perspective: TimePerspectiveText {
        title: "⏳ Perspectiva do Tempo",
        days_lived: "Dias Vividos",
        days_remaining: "Dias Restantes*",
        life_completed: "Vida Completa",
        life_ahead: "Vida pela Frente*",
        disclaimer: "* Baseado na expectativa de vida média de 80 anos. Faça cada dia valer! 💪",
    },
    fun_facts: FunFactText {
        title: "🎲 Curiosidades da Sua Vida",
        moon_trips: |n| format!("Você viajou {n} vezes a distância até a Lua pelo espaço! 🌙"),
        sun_trips: |n| format!("São {n} viagens de ida e volta ao Sol! ☀️"),
        heart_billion: |n| format!("Seu coração bateu mais de {n} BILHÕES de vezes! ❤️"),
        heart_million: |n| format!("Seu coração bateu {n} milhões de vezes! ❤️"),
        books: |n| format!("Se lesse 1 livro por semana, teria lido {n} livros! 📚"),
        pizza: |n| format!("Você provavelmente comeu cerca de {n} fatias de pizza! 🍕"),
        hair: |n| format!("Seu cabelo cresceu aproximadamente {n} metros no total! 💇"),
        nails: |n| format!("Suas unhas cresceram cerca de {n} cm! 💅"),
        words: |n| format!("Você falou aproximadamente {n} milhões de palavras! 🗣️"),
    },
    card: CardText {
        title: "✨ Life Stats ✨",
        born: "Nascido/a em",
        heartbeats: "Batimentos",
        breaths: "Respirações",
        space_km: "KM no Espaço",
        days_lived: "Dias Vividos",
        sleep_years: "Anos Dormindo",
        full_moons: "Luas Cheias",
        life_progress: "Progresso de Vida",
        age_text: |y, m, d| format!("{y} anos, {m} meses, {d} dias"),
        watermark: "🌐 lifestats.app — Descubra sua vida em números",
    },
};

// ============================================================
// हिन्दी
// ============================================================

static HI: Catalog = Catalog {
    locale: Locale::Hi,
    stats: StatsText {
        title: "आपका जीवन संख्याओं में",
        born_on: "जन्म",
        you_are: "— आपकी उम्र",
        years_months_days: |y, m, d| format!("{y} साल, {m} महीने और {d} दिन"),
        old: "है।",
    },
    date_input: DateInputText {
        error_empty: "कृपया अपनी जन्म तिथि चुनें",
        error_future: "जन्म तिथि भविष्य में नहीं हो सकती!",
        error_invalid: "कृपया एक मान्य जन्म तिथि दर्ज करें",
    },
    body: BodyText {
        section_title: "📊 आपके शरीर के आँकड़े",
        heartbeats: "दिल की धड़कनें",
        breaths: "साँसें ली गईं",
        blinks: "आँखों की पलकें",
        sleep_years: "सोने के साल",
        meals: "भोजन किए",
        water: "लीटर पानी",
    },
    journey: JourneyText {
        section_title: "🚀 आपकी यात्रा",
        space_km: "KM अंतरिक्ष में",
        walked: "KM चले",
        sunrises: "सूर्योदय",
        full_moons: "पूर्णिमा",
        laughs: "बार हँसे",
        dreams: "सपने देखे",
    },
    life_grid: LifeGridText {
        title: "🗓️ सप्ताहों में आपका जीवन",
        description: |lived, total| {
            format!("प्रत्येक वर्ग = 1 सप्ताह। आपने {total} में से {lived} सप्ताह जीए हैं।")
        },
        weeks_lived: "जीवित सप्ताह",
        weeks_remaining: "शेष सप्ताह",
        weeks_per_year: "प्रत्येक पंक्ति = 1 वर्ष (52 सप्ताह)",
    },
    time_perspective: TimePerspectiveText {
        title: "⏳ समय का दृष्टिकोण",
        days_lived: "जीए गए दिन",
        days_remaining: "शेष दिन*",
        life_completed: "जीवन पूर्ण",
        life_ahead: "आगे का जीवन*",
        disclaimer: "* 80 वर्ष की औसत जीवन प्रत्याशा पर आधारित। हर दिन को महत्वपूर्ण बनाएँ! 💪",
    },
    fun_facts: FunFactText {
        title: "🎲 आपके जीवन के रोचक तथ्य",
        moon_trips: |n| format!("आपने अंतरिक्ष में चंद्रमा की दूरी से {n} गुना यात्रा की है! 🌙"),
        sun_trips: |n| format!("वो सूर्य तक {n} आने-जाने की यात्राएँ हैं! ☀️"),
        heart_billion: |n| format!("आपका दिल {n} अरब से अधिक बार धड़का है! ❤️"),
        heart_million: |n| format!("आपका दिल {n} मिलियन बार धड़का है! ❤️"),
        books: |n| format!("अगर आप सप्ताह में 1 किताब पढ़ते, तो {n} किताबें पढ़ चुके होते! 📚"),
        pizza: |n| format!("आपने शायद {n} पिज़्ज़ा स्लाइस खाए हैं! 🍕"),
        hair: |n| format!("आपके बाल कुल मिलाकर लगभग {n} मीटर बढ़े हैं! 💇"),
        nails: |n| format!("आपके नाखून लगभग {n} सेमी बढ़े हैं! 💅"),
        words: |n| format!("आपने लगभग {n} मिलियन शब्द बोले हैं! 🗣️"),
    },
    card: CardText {
        title: "✨ Life Stats ✨",
        born: "जन्म",
        heartbeats: "धड़कनें",
        breaths: "साँसें",
        space_km: "KM अंतरिक्ष में",
        days_lived: "जीए गए दिन",
        sleep_years: "सोने के साल",
        full_moons: "पूर्णिमाएँ",
        life_progress: "जीवन प्रगति",
        age_text: |y, m, d| format!("{y} साल, {m} महीने, {d} दिन"),
        watermark: "🌐 lifestats.app — अपना जीवन संख्याओं में खोजें",
    },
};

// ============================================================
// Français
// ============================================================

static FR: Catalog = Catalog {
    locale: Locale::Fr,
    stats: StatsText {
        title: "Votre Vie en Chiffres",
        born_on: "Né(e) le",
        you_are: "— Vous avez",
        years_months_days: |y, m, d| format!("{y} ans, {m} mois et {d} jours"),
        old: ".",
    },
    date_input: DateInputText {
        error_empty: "Veuillez sélectionner votre date de naissance",
        error_future: "La date ne peut pas être dans le futur !",
        error_invalid: "Veuillez entrer une date valide",
    },
    body: BodyText {
        section_title: "📊 Statistiques Corporelles",
        heartbeats: "Battements de Cœur",
        breaths: "Respirations",
        blinks: "Clignements",
        sleep_years: "Années à Dormir",
        meals: "Repas Pris",
        water: "Litres d'Eau",
    },
    journey: JourneyText {
        section_title: "🚀 Votre Voyage",
        space_km: "KM dans l'Espace",
        walked: "KM Marchés",
        sunrises: "Levers de Soleil",
        full_moons: "Pleines Lunes",
        laughs: "Fois Ri",
        dreams: "Rêves Faits",
    },
    life_grid: LifeGridText {
        title: "🗓️ Votre Vie en Semaines",
        description: |lived, total| {
            format!("Chaque carré = 1 semaine. Vous avez vécu {lived} sur {total} semaines.")
        },
        weeks_lived: "Semaines vécues",
        weeks_remaining: "Semaines restantes",
        weeks_per_year: "Chaque ligne = 1 an (52 semaines)",
    },
    time_perspective: TimePerspectiveText {
        title: "⏳ Perspective Temporelle",
        days_lived: "Jours Vécus",
        days_remaining: "Jours Restants*",
        life_completed: "Vie Accomplie",
        life_ahead: "Vie Devant*",
        disclaimer: "* Basé sur une espérance de vie moyenne de 80 ans. Faites compter chaque jour ! 💪",
    },
    fun_facts: FunFactText {
        title: "🎲 Faits Amusants sur Votre Vie",
        moon_trips: |n| {
            format!("Vous avez parcouru {n} fois la distance jusqu'à la Lune dans l'espace ! 🌙")
        },
        sun_trips: |n| format!("C'est {n} allers-retours vers le Soleil ! ☀️"),
        heart_billion: |n| format!("Votre cœur a battu plus de {n} MILLIARDS de fois ! ❤️"),
        heart_million: |n| format!("Votre cœur a battu {n} millions de fois ! ❤️"),
        books: |n| format!("Si vous lisiez 1 livre par semaine, vous auriez lu {n} livres ! 📚"),
        pizza: |n| format!("Vous avez probablement mangé environ {n} parts de pizza ! 🍕"),
        hair: |n| format!("Vos cheveux ont poussé d'environ {n} mètres au total ! 💇"),
        nails: |n| format!("Vos ongles ont poussé d'environ {n} cm ! 💅"),
        words: |n| format!("Vous avez prononcé environ {n} millions de mots ! 🗣️"),
    },
    card: CardText {
        title: "✨ Life Stats ✨",
        born: "Né(e) le",
        heartbeats: "Battements",
        breaths: "Respirations",
        space_km: "KM dans l'Espace",
        days_lived: "Jours Vécus",
        sleep_years: "Années de Sommeil",
        full_moons: "Pleines Lunes",
        life_progress: "Progression de Vie",
        age_text: |y, m, d| format!("{y} ans, {m} mois, {d} jours"),
        watermark: "🌐 lifestats.app — Découvrez votre vie en chiffres",
    },
};
