//! Built-in titles and payloads.
//!
//! Payloads are opaque to the shell; the viewer shows them as-is.

use super::AppKey;

pub(super) fn default_title(key: AppKey) -> &'static str {
    match key {
        AppKey::Espressioni => "Espressioni",
        AppKey::Termometro => "Termometro",
        AppKey::Mcmmcd => "m.c.m. e M.C.D.",
        AppKey::Sudoku => "Sudoku",
    }
}

pub(super) fn default_content(key: AppKey) -> &'static str {
    match key {
        AppKey::Espressioni => {
            "Risolvi le espressioni passo dopo passo.\n\
             \n\
             Scrivi un'espressione con parentesi tonde, quadre e graffe,\n\
             poi segui ogni passaggio fino al risultato finale.\n\
             \n\
             Esempio:  { [ (3 + 2) x 4 - 5 ] : 3 } + 1"
        }
        AppKey::Termometro => {
            "Il termometro dei numeri relativi.\n\
             \n\
             Sposta la colonnina sopra e sotto lo zero per vedere\n\
             come cambiano le temperature e come si sommano i numeri\n\
             positivi e negativi.\n\
             \n\
             Converti anche tra gradi Celsius e Fahrenheit."
        }
        AppKey::Mcmmcd => {
            "Minimo comune multiplo e Massimo comune divisore.\n\
             \n\
             Inserisci due o piu numeri: scomponili in fattori primi,\n\
             poi scegli i fattori comuni (M.C.D.) oppure comuni e non\n\
             comuni con l'esponente piu alto (m.c.m.)."
        }
        AppKey::Sudoku => {
            "Sudoku 9x9.\n\
             \n\
             Completa la griglia: ogni riga, ogni colonna e ogni\n\
             riquadro 3x3 deve contenere tutti i numeri da 1 a 9.\n\
             \n\
             Controlla la soluzione quando hai finito."
        }
    }
}
